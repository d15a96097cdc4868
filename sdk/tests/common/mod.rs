//! In-process stand-in for the encryption gateway.
//!
//! Decrypt endpoints "decrypt" by unpacking the SDK's little-endian
//! encoding, so encrypt -> decrypt round trips end to end.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use num_bigint::BigUint;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::Notify;

/// Ciphertext the fake gateway answers with HTTP 500.
pub const FAILING_CIPHERTEXT: &str = "0xdead";
/// Ciphertext the fake gateway answers with an unparseable value.
pub const GARBLED_CIPHERTEXT: &str = "0xbeef";
/// Public-decrypt ciphertext the fake gateway holds until released (euint16 42).
pub const HELD_CIPHERTEXT: &str = "0x2a00";

#[derive(Clone, Default)]
struct GatewayState {
    healthy: bool,
    health_hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    held_arrived: Arc<Notify>,
    held_release: Arc<Notify>,
}

pub struct FakeGateway {
    pub url: String,
    health_hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    held_arrived: Arc<Notify>,
    held_release: Arc<Notify>,
}

impl FakeGateway {
    pub async fn spawn() -> Self {
        Self::spawn_with_health(true).await
    }

    pub async fn spawn_unhealthy() -> Self {
        Self::spawn_with_health(false).await
    }

    async fn spawn_with_health(healthy: bool) -> Self {
        let state = GatewayState {
            healthy,
            ..Default::default()
        };
        let health_hits = Arc::clone(&state.health_hits);
        let requests = Arc::clone(&state.requests);
        let held_arrived = Arc::clone(&state.held_arrived);
        let held_release = Arc::clone(&state.held_release);

        let app = Router::new()
            .route("/health", get(health))
            .route("/decrypt", post(decrypt))
            .route("/public-decrypt", post(public_decrypt))
            .route("/user-decrypt", post(user_decrypt))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            health_hits,
            requests,
            held_arrived,
            held_release,
        }
    }

    pub fn health_hits(&self) -> usize {
        self.health_hits.load(Ordering::SeqCst)
    }

    /// Wait until a `HELD_CIPHERTEXT` request is parked in the gateway.
    pub async fn held_request_arrived(&self) {
        self.held_arrived.notified().await;
    }

    /// Let the parked `HELD_CIPHERTEXT` request answer.
    pub fn release_held_request(&self) {
        self.held_release.notify_one();
    }

    /// `(endpoint, body)` of every decrypt request so far.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().clone()
    }
}

/// A URL nobody is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn health(State(state): State<GatewayState>) -> StatusCode {
    state.health_hits.fetch_add(1, Ordering::SeqCst);
    if state.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn decrypt(State(state): State<GatewayState>, Json(body): Json<Value>) -> Response {
    respond(&state, "decrypt", body)
}

async fn public_decrypt(State(state): State<GatewayState>, Json(body): Json<Value>) -> Response {
    if body.get("contractAddress").and_then(Value::as_str).is_none() {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if body["ciphertext"].as_str() == Some(HELD_CIPHERTEXT) {
        state.held_arrived.notify_one();
        state.held_release.notified().await;
    }
    respond(&state, "public-decrypt", body)
}

async fn user_decrypt(State(state): State<GatewayState>, Json(body): Json<Value>) -> Response {
    if body.get("signature").and_then(Value::as_str).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    respond(&state, "user-decrypt", body)
}

fn respond(state: &GatewayState, endpoint: &str, body: Value) -> Response {
    state
        .requests
        .lock()
        .push((endpoint.to_string(), body.clone()));

    let ciphertext = body["ciphertext"].as_str().unwrap_or_default();
    let value_type = body["type"].as_str().unwrap_or_default();

    if ciphertext == FAILING_CIPHERTEXT {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if ciphertext == GARBLED_CIPHERTEXT {
        return Json(json!({ "value": "not-a-value" })).into_response();
    }

    let bytes = hex::decode(ciphertext.trim_start_matches("0x")).unwrap_or_default();
    let value = match value_type {
        "ebool" => (bytes.first() == Some(&1)).to_string(),
        "eaddress" => format!("0x{}", hex::encode(&bytes)),
        _ => BigUint::from_bytes_le(&bytes).to_string(),
    };

    Json(json!({ "value": value })).into_response()
}
