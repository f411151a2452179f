// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Transport failure or non-success status from the memo service
    #[error("{0}")]
    Request(String),
    #[error("No memo form is open")]
    FormNotOpen,
    #[error("Card not found in gallery: {0}")]
    CardNotFound(i64),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl DomainError {
    pub fn status(code: u16) -> Self {
        DomainError::Request(format!("Request failed with status code {}", code))
    }
}
