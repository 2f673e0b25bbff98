//! Local stand-in for the inference endpoint used by tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub enum StubBehavior {
    /// 200 with a JSON body
    Json(&'static str),
    /// 200 with a non-JSON body
    Raw(&'static str),
    /// Bare status code
    Status(u16),
    /// 503 for the first N hits, then 200 with the JSON body
    FailThenJson(usize, &'static str),
    /// Sleep before answering 200 `{}`
    Delay(Duration),
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct Stub {
    pub url: String,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
}

impl Stub {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst);
    state.received.lock().unwrap().push(body);

    match state.behavior {
        StubBehavior::Json(text) | StubBehavior::Raw(text) => text.to_string().into_response(),
        StubBehavior::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        StubBehavior::FailThenJson(failures, text) => {
            if hit < failures {
                StatusCode::SERVICE_UNAVAILABLE.into_response()
            } else {
                text.to_string().into_response()
            }
        }
        StubBehavior::Delay(delay) => {
            tokio::time::sleep(delay).await;
            "{}".into_response()
        }
    }
}

/// Serve the stub on an ephemeral local port
pub async fn spawn_stub(behavior: StubBehavior) -> Stub {
    let hits = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/predict", post(handle))
        .with_state(StubState {
            behavior,
            hits: hits.clone(),
            received: received.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        url: format!("http://{}/predict", addr),
        hits,
        received,
    }
}

/// URL of a local port nothing listens on
pub async fn unused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/predict", addr)
}
