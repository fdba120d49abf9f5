/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use credit_core::ids::IdGenerator;
use credit_core::memory_state;
use credit_core::types::*;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Hands out `id-1`, `id-2`, ... in order.
#[derive(Debug, Default)]
pub struct SequenceIds {
    next: AtomicUsize,
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 8080,
        base_url: String::new(),
        database_url: None,
        database_url_file: None,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let mut state = memory_state(create_mock_cli());
    state.ids = Arc::new(SequenceIds::default());
    Arc::new(state)
}

pub fn create_app() -> Router {
    web::create_router(create_mock_state())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

/// Posts `body` and returns the `Location` of the created record.
pub async fn create(app: &Router, collection: &str, body: Value) -> String {
    let response = send(app, "POST", &format!("/{}", collection), Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    location(&response)
}
