use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use alphavantage_core::upstream::{AlphaVantageHttpClient, HttpClientConfig};
use alphavantage_core::{
    ErrorKind,
    Gateway,
    InvocationRequest,
    ToolRegistry,
    UpstreamClient,
    UpstreamFailure,
    UpstreamQuery,
};
use alphavantage_schema::models::Family;
use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};

const API_KEY: &str = "test-key-123";

async fn echo(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("apikey").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::OK,
            Json(json!({"Error Message": "the parameter apikey is invalid or missing."})),
        );
    }
    let symbol = params.get("symbol").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "Meta Data": {"2. Symbol": symbol, "function": params.get("function")},
            "Time Series (Daily)": {"2024-01-02": {"4. close": "161.5"}},
            "echo": params,
        })),
    )
}

async fn spawn_provider() -> SocketAddr {
    let router = Router::new()
        .route("/query", get(echo))
        .route("/limited", get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }))
        .route("/garbage", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client(base_url: String, api_key: &str) -> AlphaVantageHttpClient {
    AlphaVantageHttpClient::new(
        HttpClientConfig::new(api_key)
            .with_base_url(base_url)
            .with_timeout(Duration::from_millis(300)),
    )
    .unwrap()
}

fn daily_query() -> UpstreamQuery {
    UpstreamQuery {
        family: Family::TimeSeries,
        function: "TIME_SERIES_DAILY",
        params: vec![("symbol", "IBM".to_string()), ("outputsize", "compact".to_string())],
    }
}

#[tokio::test]
async fn sends_function_params_and_key() {
    let addr = spawn_provider().await;
    let client = client(format!("http://{addr}/query"), API_KEY);

    let body = client.execute(&daily_query()).await.unwrap();

    assert_eq!(body["echo"]["function"], "TIME_SERIES_DAILY");
    assert_eq!(body["echo"]["symbol"], "IBM");
    assert_eq!(body["echo"]["outputsize"], "compact");
    assert_eq!(body["echo"]["apikey"], API_KEY);
}

#[tokio::test]
async fn non_success_status_is_reported_without_the_key() {
    let addr = spawn_provider().await;
    let client = client(format!("http://{addr}/limited"), API_KEY);

    let err = client.execute(&daily_query()).await.unwrap_err();

    assert_eq!(
        err,
        UpstreamFailure::Status {
            status: 429,
            message: "slow down".to_string(),
        }
    );
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let addr = spawn_provider().await;
    let client = client(format!("http://{addr}/garbage"), API_KEY);

    let err = client.execute(&daily_query()).await.unwrap_err();
    assert!(matches!(err, UpstreamFailure::Decode(ref message) if message.contains("maintenance")));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let addr = spawn_provider().await;
    let client = client(format!("http://{addr}/slow"), API_KEY);

    let err = client.execute(&daily_query()).await.unwrap_err();
    assert!(matches!(err, UpstreamFailure::Timeout(_)), "{err:?}");
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn closed_port_is_a_connect_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client(format!("http://{addr}/query"), API_KEY);

    let err = client.execute(&daily_query()).await.unwrap_err();
    assert!(
        matches!(err, UpstreamFailure::Connect(_) | UpstreamFailure::Transport(_)),
        "{err:?}"
    );
}

#[tokio::test]
async fn gateway_over_http_classifies_end_to_end() {
    let addr = spawn_provider().await;
    let registry = Arc::new(ToolRegistry::builtin().unwrap());

    let good = Gateway::new(registry.clone(), Arc::new(client(format!("http://{addr}/query"), API_KEY)));
    let payload = good
        .invoke(&InvocationRequest::from_value("get_daily", json!({"symbol": "IBM"})))
        .await
        .unwrap();
    assert_eq!(payload.meta_data().unwrap()["2. Symbol"], "IBM");

    let bad_key = Gateway::new(registry.clone(), Arc::new(client(format!("http://{addr}/query"), "wrong")));
    let err = bad_key
        .invoke(&InvocationRequest::from_value("get_daily", json!({"symbol": "IBM"})))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UpstreamAuthenticationFailed);

    let limited = Gateway::new(registry, Arc::new(client(format!("http://{addr}/limited"), API_KEY)));
    let err = limited
        .invoke(&InvocationRequest::from_value("get_daily", json!({"symbol": "IBM"})))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UpstreamRateLimited);
    assert!(err.is_retryable());
}
