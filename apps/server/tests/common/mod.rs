//! Shared harness: a stub standing in for all three carriers, and a gateway
//! router pointed at it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use coverhub_server::{api::app_router, build_state, config::Config};

async fn dyad_quote(headers: HeaderMap, Json(_body): Json<Value>) -> Json<Value> {
    if headers.get("X-API-Key").and_then(|v| v.to_str().ok()) != Some("dyad-key") {
        return Json(json!({ "isSuccessful": false, "errorMessages": ["Missing API key"] }));
    }
    Json(json!({
        "isSuccessful": true,
        "quoteNumber": "DY-100",
        "premium": { "basePremium": 4200.0, "fees": 150.0, "totalPremium": 4350.0 },
        "coverages": [{ "coverageName": "General Aggregate", "limit": 2000000 }]
    }))
}

async fn zywave_quote(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({
        "responseStatus": "ERROR",
        "messages": [
            { "severity": "WARNING", "messageCode": "W1", "messageText": "Late submission" },
            { "severity": "ERROR", "messageCode": "E42", "messageText": "Zone not written" }
        ]
    }))
}

async fn herald_bind(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "status": "Success",
        "policyId": format!("POL-{}", body["quoteReference"].as_str().unwrap_or_default()),
        "premium": 1800.0
    }))
}

/// Starts the stub carrier on an ephemeral port.
pub async fn spawn_carriers() -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/quote", post(dyad_quote))
        .route("/transactions/quote", post(zywave_quote))
        .route("/v2/insurance/bind", post(herald_bind));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn gateway() -> Router {
    gateway_with(&[]).await
}

/// Gateway against the stub carrier, with `overrides` layered over the
/// default environment.
pub async fn gateway_with(overrides: &[(&str, String)]) -> Router {
    let carriers = spawn_carriers().await;
    let base = format!("http://{}", carriers);
    let mut vars: HashMap<String, String> = [
        ("COVERHUB_DYAD_BASE_URL", base.as_str()),
        ("COVERHUB_DYAD_API_KEY", "dyad-key"),
        ("COVERHUB_HERALD_BASE_URL", base.as_str()),
        ("COVERHUB_HERALD_API_TOKEN", "herald-token"),
        ("COVERHUB_ZYWAVE_BASE_URL", base.as_str()),
        ("COVERHUB_ZYWAVE_API_KEY", "zywave-key"),
        ("COVERHUB_RETRY_ATTEMPTS", "0"),
        ("COVERHUB_PROVIDER_TIMEOUT_SECS", "5"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.clone());
    }

    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

/// Starts a carrier that answers every call with 503, counting the hits.
pub async fn spawn_unavailable(hits: Arc<AtomicU32>) -> SocketAddr {
    let app = Router::new().fallback(move || {
        let hits = hits.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            (StatusCode::SERVICE_UNAVAILABLE, "maintenance window")
        }
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn post_json(app: &Router, uri: &str, body: String) -> (u16, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (u16, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}
