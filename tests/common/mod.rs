//! In-process fake of the recorder backend for HTTP-level tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Debug, Default)]
pub struct Backend {
    pub requests: Vec<String>,
    pub meetings: Vec<Value>,
    pub setup_complete: bool,
    pub email: Option<String>,
    pub recording: bool,
    pub last_stop_body: Option<Value>,
    pub last_connect_body: Option<Value>,
    pub pending_code: Option<(String, String)>,
}

pub type Shared = Arc<Mutex<Backend>>;

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn log(state: &Shared, line: String) {
    state.lock().unwrap().requests.push(line);
}

async fn start(State(state): State<Shared>) -> Response {
    log(&state, "POST /recording/start".to_string());
    let mut backend = state.lock().unwrap();
    if backend.recording {
        return detail(StatusCode::CONFLICT, "Already recording");
    }
    backend.recording = true;
    Json(json!({ "status": "recording" })).into_response()
}

async fn abort(State(state): State<Shared>) -> Json<Value> {
    log(&state, "POST /recording/abort".to_string());
    state.lock().unwrap().recording = false;
    Json(json!({ "status": "aborted" }))
}

async fn stop(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    log(&state, "POST /recording/stop".to_string());
    let mut backend = state.lock().unwrap();
    backend.recording = false;
    backend.last_stop_body = Some(body);
    backend.meetings.insert(
        0,
        json!({
            "id": "m-new",
            "createdAt": "2026-10-19T10:00:00",
            "duration": 61,
            "status": "processing"
        }),
    );
    Json(json!({ "meetingId": "m-new" }))
}

async fn transcript(State(state): State<Shared>) -> Json<Value> {
    log(&state, "GET /recording/transcript".to_string());
    Json(json!({ "transcript": "hello there" }))
}

async fn list_meetings(State(state): State<Shared>) -> Json<Value> {
    log(&state, "GET /meetings".to_string());
    let backend = state.lock().unwrap();
    Json(json!({
        "meetings": backend.meetings,
        "storageUsedMB": 1500.5,
        "storageTotalMB": 64000
    }))
}

async fn get_meeting(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    log(&state, format!("GET /meetings/{}", id));
    let backend = state.lock().unwrap();
    match backend.meetings.iter().find(|m| m["id"] == id.as_str()) {
        Some(meeting) => Json(meeting.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Meeting not found"),
    }
}

async fn delete_meeting(State(state): State<Shared>, Path(id): Path<String>) -> Json<Value> {
    log(&state, format!("DELETE /meetings/{}", id));
    state
        .lock()
        .unwrap()
        .meetings
        .retain(|m| m["id"] != id.as_str());
    Json(json!({ "status": "deleted" }))
}

async fn email_meeting(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    log(&state, format!("POST /export/email/{}", id));
    let mut backend = state.lock().unwrap();
    if backend.email.is_none() {
        return detail(StatusCode::BAD_REQUEST, "No email configured");
    }
    if let Some(meeting) = backend.meetings.iter_mut().find(|m| m["id"] == id.as_str()) {
        meeting["emailed"] = json!(true);
        meeting["emailedAt"] = json!("2026-10-19T10:05:00");
    }
    Json(json!({ "status": "sent" })).into_response()
}

async fn settings(State(state): State<Shared>) -> Json<Value> {
    log(&state, "GET /settings".to_string());
    let backend = state.lock().unwrap();
    Json(json!({
        "emailConfigured": backend.email.is_some(),
        "emailAddress": backend.email,
        "setupComplete": backend.setup_complete
    }))
}

async fn setup_complete(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    log(&state, "POST /settings/setup-complete".to_string());
    state.lock().unwrap().setup_complete = body["complete"].as_bool().unwrap_or(false);
    Json(json!({ "status": "updated" }))
}

async fn factory_reset(State(state): State<Shared>) -> StatusCode {
    log(&state, "POST /settings/factory-reset".to_string());
    StatusCode::SERVICE_UNAVAILABLE
}

async fn wifi_status(State(state): State<Shared>) -> Json<Value> {
    log(&state, "GET /settings/wifi/status".to_string());
    Json(json!({ "connected": false, "ssid": null }))
}

async fn wifi_scan(State(state): State<Shared>) -> Json<Value> {
    log(&state, "GET /settings/wifi/scan".to_string());
    Json(json!({
        "networks": [
            { "ssid": "Office", "signal": 82, "secure": true },
            { "ssid": "Guest", "secure": false }
        ]
    }))
}

async fn wifi_connect(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    log(&state, "POST /settings/wifi/connect".to_string());
    let wrong = body["password"] != "hunter22";
    state.lock().unwrap().last_connect_body = Some(body);
    if wrong {
        return detail(StatusCode::BAD_REQUEST, "Wrong password for Office");
    }
    Json(json!({ "status": "connected", "message": "Connected to Office" })).into_response()
}

async fn send_otp(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    log(&state, "POST /auth/send-otp".to_string());
    let email = body["email"].as_str().unwrap_or_default().to_string();
    state.lock().unwrap().pending_code = Some((email, "1234".to_string()));
    Json(json!({ "status": "sent" }))
}

async fn verify_otp(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    log(&state, "POST /auth/verify-otp".to_string());
    let mut backend = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let code = body["code"].as_str().unwrap_or_default().to_string();
    if backend.pending_code != Some((email.clone(), code)) {
        return detail(StatusCode::BAD_REQUEST, "Incorrect code. Try again.");
    }
    backend.pending_code = None;
    backend.email = Some(email.clone());
    backend.setup_complete = true;
    Json(json!({ "status": "verified", "email": email })).into_response()
}

pub fn router(state: Shared) -> Router {
    let api = Router::new()
        .route("/recording/start", post(start))
        .route("/recording/abort", post(abort))
        .route("/recording/stop", post(stop))
        .route("/recording/transcript", get(transcript))
        .route("/meetings", get(list_meetings))
        .route("/meetings/:id", get(get_meeting).delete(delete_meeting))
        .route("/export/email/:id", post(email_meeting))
        .route("/settings", get(settings))
        .route("/settings/setup-complete", post(setup_complete))
        .route("/settings/factory-reset", post(factory_reset))
        .route("/settings/wifi/status", get(wifi_status))
        .route("/settings/wifi/scan", get(wifi_scan))
        .route("/settings/wifi/connect", post(wifi_connect))
        .route("/auth/send-otp", post(send_otp))
        .route("/auth/verify-otp", post(verify_otp))
        .with_state(state);

    Router::new().nest("/api", api)
}

/// Start the fake backend on an ephemeral port. Returns its API root.
pub async fn spawn_backend(backend: Backend) -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(backend));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api/", addr), state)
}

pub fn finished_meeting(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2026-10-18T09:30:00",
        "duration": 1830,
        "title": title,
        "summary": "Agreed on the Q4 plan.",
        "actionItems": ["Send deck"],
        "audioSize": 12.5,
        "transcriptSize": 0.1,
        "pdfSize": 0.2
    })
}
