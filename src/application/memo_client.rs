// src/application/memo_client.rs
use crate::domain::{DomainError, Memo, MemoFields};

/// Access to the remote memo collection.
///
/// Every call issues exactly one request; nothing is cached or retried.
#[allow(async_fn_in_trait)]
pub trait MemoApi {
    async fn list(&mut self) -> Result<Vec<Memo>, DomainError>;

    async fn get(&mut self, id: i64) -> Result<Memo, DomainError>;

    /// Create a memo; the returned record carries the server-assigned id
    async fn create(&mut self, fields: &MemoFields) -> Result<Memo, DomainError>;

    /// Replace all fields of an existing memo
    async fn update(&mut self, id: i64, fields: &MemoFields) -> Result<Memo, DomainError>;

    async fn delete(&mut self, id: i64) -> Result<(), DomainError>;
}
