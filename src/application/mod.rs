// src/application/mod.rs
pub mod gallery;
pub mod memo_client;
pub mod page;
pub mod router;

pub use gallery::{GalleryController, ModalMode, Outcome};
pub use memo_client::MemoApi;
pub use page::{Dialog, Page};
pub use router::{Action, ClickEvent, ClickTarget, Element, EventRouter, Routed};
