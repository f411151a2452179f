// Each test crate uses a different subset of these helpers
#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use memo_gallery::domain::{Memo, MemoFields};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Known memos for gallery tests
pub mod test_memos {
    use super::*;

    pub const FERRIS: i64 = 1;
    pub const TOKIO: i64 = 2;
    pub const SERDE: i64 = 3;

    // For testing error cases
    pub const NONEXISTENT: i64 = 999;

    pub fn ferris() -> Memo {
        Memo {
            id: FERRIS,
            title: "Ferris".to_string(),
            description: "The unofficial mascot".to_string(),
            tags: "rust;crab".to_string(),
            image: "https://example.com/ferris.png".to_string(),
        }
    }

    pub fn tokio() -> Memo {
        Memo {
            id: TOKIO,
            title: "Tokio".to_string(),
            description: "An async runtime".to_string(),
            tags: "async;;runtime;".to_string(),
            image: "https://example.com/tokio.png".to_string(),
        }
    }

    pub fn serde() -> Memo {
        Memo {
            id: SERDE,
            title: "Serde".to_string(),
            description: "Serialization framework".to_string(),
            tags: String::new(),
            image: "https://example.com/serde.png".to_string(),
        }
    }

    pub fn all() -> Vec<Memo> {
        vec![ferris(), tokio(), serde()]
    }
}

/// A request as received by `StubServer`.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: String,
}

#[derive(Default)]
struct StubState {
    memos: BTreeMap<i64, Memo>,
    // Answer every request with this instead of serving the collection
    canned: Option<(StatusCode, String)>,
    requests: Vec<RecordedRequest>,
}

impl StubState {
    fn record(&mut self, method: Method, uri: &Uri, body: String) {
        self.requests.push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            body,
        });
    }

    fn canned(&self) -> Option<Response> {
        self.canned.clone().map(|(status, body)| {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        })
    }
}

type SharedState = Arc<Mutex<StubState>>;

/// Memo service on a local port, backed by an in-memory collection.
///
/// Serves `/memos/` and `/memos/:id` like the real service, so multi-request
/// flows can run against `HttpMemoClient`. Every request is recorded.
pub struct StubServer {
    pub addr: SocketAddr,
    state: SharedState,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Serve `memos` with create, read, update and delete.
    pub async fn serving(memos: Vec<Memo>) -> Self {
        let state = StubState {
            memos: memos.into_iter().map(|memo| (memo.id, memo)).collect(),
            ..Default::default()
        };
        Self::start(state).await
    }

    /// Answer every request with `status` and `body`.
    pub async fn respond(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("Invalid status code");
        let state = StubState {
            canned: Some((status, body.to_string())),
            ..Default::default()
        };
        Self::start(state).await
    }

    async fn start(state: StubState) -> Self {
        let state = Arc::new(Mutex::new(state));
        let app = Router::new()
            .route("/memos/", get(list_memos).post(create_memo))
            .route(
                "/memos/:id",
                get(get_memo).put(update_memo).delete(delete_memo),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server error");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/memos/", self.addr)
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }

    pub async fn memos(&self) -> Vec<Memo> {
        self.state.lock().await.memos.values().cloned().collect()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// GET /memos/
async fn list_memos(State(state): State<SharedState>, method: Method, uri: Uri) -> Response {
    let mut stub = state.lock().await;
    stub.record(method, &uri, String::new());
    if let Some(canned) = stub.canned() {
        return canned;
    }
    Json(stub.memos.values().cloned().collect::<Vec<_>>()).into_response()
}

// POST /memos/
async fn create_memo(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let mut stub = state.lock().await;
    stub.record(method, &uri, body.clone());
    if let Some(canned) = stub.canned() {
        return canned;
    }
    let fields: MemoFields = match serde_json::from_str(&body) {
        Ok(fields) => fields,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let id = stub.memos.keys().max().copied().unwrap_or(0) + 1;
    let memo = Memo::with_fields(id, fields);
    stub.memos.insert(id, memo.clone());
    Json(memo).into_response()
}

// GET /memos/:id
async fn get_memo(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
) -> Response {
    let mut stub = state.lock().await;
    stub.record(method, &uri, String::new());
    if let Some(canned) = stub.canned() {
        return canned;
    }
    match stub.memos.get(&id) {
        Some(memo) => Json(memo.clone()).into_response(),
        None => not_found(),
    }
}

// PUT /memos/:id
async fn update_memo(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let mut stub = state.lock().await;
    stub.record(method, &uri, body.clone());
    if let Some(canned) = stub.canned() {
        return canned;
    }
    let fields: MemoFields = match serde_json::from_str(&body) {
        Ok(fields) => fields,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match stub.memos.get_mut(&id) {
        Some(slot) => {
            *slot = Memo::with_fields(id, fields);
            Json(slot.clone()).into_response()
        }
        None => not_found(),
    }
}

// DELETE /memos/:id
async fn delete_memo(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
) -> Response {
    let mut stub = state.lock().await;
    stub.record(method, &uri, String::new());
    if let Some(canned) = stub.canned() {
        return canned;
    }
    match stub.memos.remove(&id) {
        Some(memo) => Json(memo).into_response(),
        None => not_found(),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
        .into_response()
}
