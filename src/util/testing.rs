// src/util/testing.rs

use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Dialog, MemoApi};
use crate::domain::{DomainError, Memo, MemoFields};

/// A request as seen by `MockMemoApi`, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Get(i64),
    Create(MemoFields),
    Update(i64, MemoFields),
    Delete(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory memo service for controller tests.
///
/// Behaves like the real service (ids assigned on create, 404 for unknown
/// ids) unless a failure is configured for an operation.
///
/// # Examples
///
/// ```
/// use memo_gallery::util::testing::MockMemoApi;
/// use memo_gallery::domain::Memo;
///
/// let mock = MockMemoApi::builder()
///     .with_memo(Memo {
///         id: 1,
///         title: "First".to_string(),
///         ..Default::default()
///     })
///     .with_list_failure("Network Error")
///     .build();
/// ```
pub struct MockMemoApi {
    memos: BTreeMap<i64, Memo>,
    failures: HashMap<Operation, DomainError>,
    next_id: Option<i64>,
    requests: Vec<Request>,
}

impl MockMemoApi {
    pub fn builder() -> MockMemoApiBuilder {
        MockMemoApiBuilder::new()
    }

    /// Every request received so far.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn memos(&self) -> Vec<Memo> {
        self.memos.values().cloned().collect()
    }

    fn record(&mut self, request: Request, operation: Operation) -> Result<(), DomainError> {
        self.requests.push(request);
        match self.failures.get(&operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self
            .next_id
            .take()
            .unwrap_or_else(|| self.memos.keys().max().copied().unwrap_or(0) + 1);
        debug!(id, "Mock assigned id");
        id
    }
}

impl MemoApi for MockMemoApi {
    async fn list(&mut self) -> Result<Vec<Memo>, DomainError> {
        self.record(Request::List, Operation::List)?;
        Ok(self.memos())
    }

    async fn get(&mut self, id: i64) -> Result<Memo, DomainError> {
        self.record(Request::Get(id), Operation::Get)?;
        self.memos.get(&id).cloned().ok_or(DomainError::status(404))
    }

    async fn create(&mut self, fields: &MemoFields) -> Result<Memo, DomainError> {
        self.record(Request::Create(fields.clone()), Operation::Create)?;
        let memo = Memo::with_fields(self.allocate_id(), fields.clone());
        self.memos.insert(memo.id, memo.clone());
        Ok(memo)
    }

    async fn update(&mut self, id: i64, fields: &MemoFields) -> Result<Memo, DomainError> {
        self.record(Request::Update(id, fields.clone()), Operation::Update)?;
        let slot = self.memos.get_mut(&id).ok_or(DomainError::status(404))?;
        *slot = Memo::with_fields(id, fields.clone());
        Ok(slot.clone())
    }

    async fn delete(&mut self, id: i64) -> Result<(), DomainError> {
        self.record(Request::Delete(id), Operation::Delete)?;
        self.memos
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::status(404))
    }
}

/// Builder for MockMemoApi
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockMemoApiBuilder {
    memos: BTreeMap<i64, Memo>,
    failures: HashMap<Operation, DomainError>,
    next_id: Option<i64>,
}

impl MockMemoApiBuilder {
    pub fn new() -> Self {
        Self {
            memos: BTreeMap::new(),
            failures: HashMap::new(),
            next_id: None,
        }
    }

    /// Add a memo that list and get return
    pub fn with_memo(mut self, memo: Memo) -> Self {
        self.memos.insert(memo.id, memo);
        self
    }

    /// Id the next create assigns
    pub fn with_next_id(mut self, id: i64) -> Self {
        self.next_id = Some(id);
        self
    }

    pub fn with_list_failure(self, message: &str) -> Self {
        self.failing(Operation::List, message)
    }

    pub fn with_get_failure(self, message: &str) -> Self {
        self.failing(Operation::Get, message)
    }

    pub fn with_create_failure(self, message: &str) -> Self {
        self.failing(Operation::Create, message)
    }

    pub fn with_update_failure(self, message: &str) -> Self {
        self.failing(Operation::Update, message)
    }

    pub fn with_delete_failure(self, message: &str) -> Self {
        self.failing(Operation::Delete, message)
    }

    fn failing(mut self, operation: Operation, message: &str) -> Self {
        self.failures
            .insert(operation, DomainError::Request(message.to_string()));
        self
    }

    pub fn build(self) -> MockMemoApi {
        MockMemoApi {
            memos: self.memos,
            failures: self.failures,
            next_id: self.next_id,
            requests: Vec::new(),
        }
    }
}

impl Default for MockMemoApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Dialog that records alerts and answers confirmations with a fixed value.
#[derive(Debug, Clone)]
pub struct ScriptedDialog {
    answer: bool,
    alerts: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedDialog {
    /// Confirms every prompt.
    pub fn new() -> Self {
        Self {
            answer: true,
            alerts: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Declines every prompt.
    pub fn declining() -> Self {
        Self {
            answer: false,
            ..Self::new()
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Default for ScriptedDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for ScriptedDialog {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answer
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
