// src/infrastructure/mod.rs
pub mod config;
pub mod document;
pub mod http;
pub mod renderer;
pub mod terminal;

pub use config::Config;
pub use document::{FormField, HtmlDocument};
pub use http::HttpMemoClient;
pub use renderer::PageWriter;
pub use terminal::TerminalDialog;
