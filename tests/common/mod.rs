#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};
use todo_api::router::{TodoState, todo_router};
use todo_api::{Config, TodoStorage};
use tower::ServiceExt;

static SEQ: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub app: Router,
    pub storage: TodoStorage,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_debug(false).await
    }

    pub async fn spawn_with_debug(debug: bool) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "todo-api-{}-{}-{}.sqlite",
            std::process::id(),
            nanos,
            SEQ.fetch_add(1, Ordering::Relaxed)
        ));

        let cfg = Config {
            database_path: path.clone(),
            debug,
            ..Config::default()
        };
        let storage = TodoStorage::initialize(&cfg)
            .await
            .expect("failed to initialize storage");
        let app = todo_router(TodoState::new(storage.clone(), cfg.debug));

        Self { app, storage, path }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(req).await.expect("request failed")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("host", "localhost")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn json(&self, method: &str, uri: &str, payload: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("host", "localhost")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .header("host", "localhost")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).expect("response body was not json")
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
