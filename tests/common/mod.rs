//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    routing::any,
    Router,
};
use tokio::net::TcpListener;

/// One request as seen by the mock admin.
#[derive(Debug, Clone)]
pub struct Captured {
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct AdminState {
    status: StatusCode,
    reply: &'static str,
    requests: Arc<Mutex<Vec<Captured>>>,
}

/// A running mock admin service.
pub struct MockAdmin {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl MockAdmin {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock admin on an ephemeral port answering every request with `status` and `reply`.
pub async fn start_mock_admin(status: u16, reply: &'static str) -> MockAdmin {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = AdminState {
        status: StatusCode::from_u16(status).unwrap(),
        reply,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(any(capture)).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockAdmin { addr, requests }
}

async fn capture(
    State(state): State<AdminState>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    state.requests.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, state.reply)
}

/// An address on loopback with nothing listening.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
