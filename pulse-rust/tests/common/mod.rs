#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, Json, Router};
use pulse_sidebar::{ArticleLocation, ArticleRef};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    response: Value,
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn stub_handler(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.bodies.lock().unwrap().push(body);
    (state.status, Json(state.response.clone()))
}

/// Stand-in for the Gemini endpoint. Answers every request with `response`
/// and records request bodies.
pub async fn spawn_gemini_stub(
    status: StatusCode,
    response: Value,
) -> (String, Arc<Mutex<Vec<Value>>>) {
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(stub_handler).with_state(StubState {
        status,
        response,
        bodies: bodies.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1beta"), bodies)
}

/// A base URL with nothing listening behind it.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1beta")
}

pub fn article() -> ArticleRef {
    ArticleRef {
        id: "hpb-closure-2025".to_string(),
        title: "Half Price Books in Downtown Berkeley to Close After 25 Years".to_string(),
        subtitle: "The beloved Shattuck Avenue staple cites rising rent.".to_string(),
        author: "Elena Rodriguez".to_string(),
        date: "December 1, 2025".to_string(),
        category: "Business".to_string(),
        content: vec![
            "BERKELEY — Half Price Books will shutter its Shattuck Avenue location.".to_string(),
            "The store plans to remain open through the holiday season.".to_string(),
        ],
        image_url: "https://picsum.photos/seed/books/800/400".to_string(),
        location: ArticleLocation {
            lat: 37.86988,
            lng: -122.26804,
            name: "Half Price Books Berkeley".to_string(),
        },
    }
}
