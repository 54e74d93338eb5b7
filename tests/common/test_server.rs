//! Local axum server answering GitLab project listing requests
//!
//! Only `GET /api/v4/groups/{group}/projects` is routed. The response is
//! chosen by the `page` query parameter; pages past the end of the canned
//! list answer with an empty JSON array. Every request, routed or not, is
//! recorded with its path and query.

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Response served for one page
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    /// `200 OK` with a JSON array of `{"id": .., "name": ..}` objects.
    pub fn projects(names: &[&str]) -> Self {
        let objects: Vec<serde_json::Value> = names
            .iter()
            .enumerate()
            .map(|(id, name)| serde_json::json!({ "id": id + 1, "name": name, "path": name }))
            .collect();
        Self::raw(200, serde_json::Value::Array(objects).to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Listing parameters; a request missing any of them is rejected with 400.
#[derive(Debug, Deserialize)]
struct ListingQuery {
    page: usize,
    #[allow(dead_code)]
    per_page: u32,
    #[allow(dead_code)]
    access_token: String,
}

#[derive(Clone)]
struct ServerState {
    pages: Arc<Vec<CannedResponse>>,
    requests: Arc<Mutex<Vec<String>>>,
    groups: Arc<Mutex<Vec<String>>>,
}

pub struct TestServer {
    base_url: String,
    state: ServerState,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(pages: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let state = ServerState {
            pages: Arc::new(pages),
            requests: Arc::new(Mutex::new(Vec::new())),
            groups: Arc::new(Mutex::new(Vec::new())),
        };

        let router = Router::new()
            .route("/api/v4/groups/{group}/projects", get(list_projects))
            .fallback(unrouted)
            .layer(middleware::from_fn_with_state(state.clone(), record_request))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets (path and query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Decoded `{group}` path parameter of every routed request.
    pub fn groups(&self) -> Vec<String> {
        self.state.groups.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record_request(State(state): State<ServerState>, request: Request, next: Next) -> Response {
    state.requests.lock().unwrap().push(request.uri().to_string());
    next.run(request).await
}

async fn list_projects(
    State(state): State<ServerState>,
    Path(group): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Response {
    state.groups.lock().unwrap().push(group);

    let canned = state
        .pages
        .get(query.page)
        .cloned()
        .unwrap_or_else(|| CannedResponse::projects(&[]));
    let status = StatusCode::from_u16(canned.status).unwrap();

    (status, [(header::CONTENT_TYPE, "application/json")], canned.body).into_response()
}

async fn unrouted() -> Response {
    (StatusCode::NOT_FOUND, r#"{"message":"404 Not Found"}"#).into_response()
}
