//! In-process stand-in for the BaseLinker connector endpoint.
//!
//! Accepts the same form-encoded envelope as the real service and echoes it
//! back inside a `SUCCESS` reply, recording every call in a shared journal.
//! Failures are reported the way the connector does: HTTP 200 with
//! `"status": "ERROR"` in the body.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::Html,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const TOKEN_HEADER: &str = "X-BLToken";

/// Length of the `payload` string served by `/large-reply`, just over 11 MiB.
pub const LARGE_REPLY_PAYLOAD_BYTES: usize = 11 * 1024 * 1024 + 17;

/// Form body of a connector call.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub method: Option<String>,
    pub parameters: Option<String>,
}

/// One call as the mock saw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedCall {
    pub token: Option<String>,
    pub method: Option<String>,
    /// Raw `parameters` field, `None` when the field was absent.
    pub parameters: Option<String>,
}

pub type Journal = Arc<RwLock<Vec<RecordedCall>>>;

pub fn app() -> Router {
    app_with_journal(Journal::default())
}

pub fn app_with_journal(journal: Journal) -> Router {
    Router::new()
        .route("/connector.php", post(connector))
        .route("/html-error", post(html_error).get(html_error))
        .route("/large-reply", post(large_reply))
        .with_state(journal)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_journal(listener, Journal::default()).await
}

pub async fn run_with_journal(listener: TcpListener, journal: Journal) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock connector listening");
    }
    axum::serve(listener, app_with_journal(journal)).await
}

fn error_reply(code: &str, message: &str) -> Json<Value> {
    Json(json!({
        "status": "ERROR",
        "error_code": code,
        "error_message": message,
    }))
}

async fn connector(
    State(journal): State<Journal>,
    headers: HeaderMap,
    Form(envelope): Form<Envelope>,
) -> Json<Value> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    journal.write().await.push(RecordedCall {
        token: token.clone(),
        method: envelope.method.clone(),
        parameters: envelope.parameters.clone(),
    });
    debug!(method = ?envelope.method, has_parameters = envelope.parameters.is_some(), "connector call");

    if token.is_none() {
        return error_reply("ERROR_BAD_TOKEN", "Invalid user token");
    }
    let Some(method) = envelope.method.filter(|m| !m.is_empty()) else {
        return error_reply("ERROR_UNKNOWN_METHOD", "An unknown method has been used");
    };

    let mut reply = Map::new();
    reply.insert("status".to_string(), Value::String("SUCCESS".to_string()));
    reply.insert("method".to_string(), Value::String(method));
    if let Some(raw) = envelope.parameters {
        match serde_json::from_str::<Value>(&raw) {
            Ok(params @ Value::Object(_)) => {
                reply.insert("parameters".to_string(), params);
            }
            _ => return error_reply("ERROR_PARAMETERS", "Parameters must be a JSON object"),
        }
    }
    Json(Value::Object(reply))
}

/// What an intermediary's error page looks like to the client.
async fn html_error() -> Html<&'static str> {
    Html("<html><body><h1>502 Bad Gateway</h1></body></html>")
}

/// A `SUCCESS` reply bigger than common default body limits.
async fn large_reply() -> Json<Value> {
    Json(json!({
        "status": "SUCCESS",
        "payload": "x".repeat(LARGE_REPLY_PAYLOAD_BYTES),
    }))
}
