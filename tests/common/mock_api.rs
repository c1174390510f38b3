//! Mock location API server for client tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    /// A successful JSON array of display names.
    pub fn list(names: &[&str]) -> Self {
        Self {
            status: 200,
            body: serde_json::to_string(names).unwrap(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message),
        }
    }

    /// A 200 whose body is not a JSON array of strings.
    pub fn malformed() -> Self {
        Self {
            status: 200,
            body: "<html>not json</html>".to_string(),
        }
    }
}

struct MockState {
    routes: Mutex<HashMap<String, MockResponse>>,
    requests: Mutex<Vec<String>>,
}

/// In-process stand-in for the location API. Paths are matched exactly
/// against the raw (still percent-encoded) request path; anything
/// without a stub gets a 404.
pub struct MockApi {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState {
            routes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock API");
        let addr = listener.local_addr().expect("mock API addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stub a path (including the leading slash, percent-encoded as the
    /// client would send it).
    pub async fn stub(&self, path: &str, response: MockResponse) {
        self.state
            .routes
            .lock()
            .await
            .insert(path.to_string(), response);
    }

    /// Raw request paths seen so far, in order.
    pub async fn requests(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }
}

async fn handle(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().await.push(path.clone());

    match state.routes.lock().await.get(&path) {
        Some(response) => (
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            response.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no stub for path").into_response(),
    }
}
