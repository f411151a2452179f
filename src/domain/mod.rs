// src/domain/mod.rs
pub mod error;
pub mod memo;

pub use error::DomainError;
pub use memo::{Memo, MemoFields};
