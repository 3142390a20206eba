#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use grubdash_backend_rs::{
    app::App,
    types::{AppContext, AppEnvironment, Context},
    utils::{id::IdGenerator, seed::Seed},
};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tower::ServiceExt;

pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub fn context(seed: Seed) -> Context {
    Context::new(
        AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
            url: String::from("http://127.0.0.1:0"),
        },
        seed,
    )
}

pub fn sequential_context(seed: Seed) -> Context {
    context(seed).with_id_generator(Arc::new(SequentialIds(AtomicUsize::new(0))))
}

pub fn router(ctx: &Context) -> Router {
    App::new(ctx.clone()).router()
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub async fn send_raw(router: &Router, method: Method, uri: &str, body: &'static str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes.to_vec())
}
