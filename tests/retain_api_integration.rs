//! Integration tests for the RetainAI HTTP adapters.
//!
//! Each test serves canned responses from a local axum router and checks:
//! 1. The request line and body the adapter sends
//! 2. How the response (or failure) is mapped onto port types

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use retain_ai::adapters::retain_api::{HttpDashboardSource, HttpPredictionGateway, RetainApiConfig};
use retain_ai::domain::dashboard::DashboardFilters;
use retain_ai::domain::prediction::RiskLevel;
use retain_ai::domain::profile::CustomerProfile;
use retain_ai::ports::{DashboardSource, GatewayError, GatewayErrorKind, PredictionGateway};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// The first request the canned service received.
#[derive(Debug)]
struct CapturedRequest {
    method: Method,
    uri: Uri,
    body: String,
}

impl CapturedRequest {
    fn path_and_query(&self) -> &str {
        self.uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_default()
    }

    fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    captured: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
}

async fn respond(State(canned): State<Canned>, method: Method, uri: Uri, body: String) -> Response {
    if let Some(tx) = canned.captured.lock().unwrap().take() {
        let _ = tx.send(CapturedRequest { method, uri, body });
    }
    (canned.status, [(header::CONTENT_TYPE, canned.content_type)], canned.body).into_response()
}

async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base_url
}

/// Serves a canned response on every path and hands back the first request.
async fn serve_canned(
    status: StatusCode,
    content_type: &'static str,
    body: &str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let (tx, rx) = oneshot::channel();
    let canned = Canned {
        status,
        content_type,
        body: body.to_string(),
        captured: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new().fallback(respond).with_state(canned);
    (spawn_server(app).await, rx)
}

fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap()
}

fn gateway(base_url: &str, timeout: Duration) -> HttpPredictionGateway {
    let config = RetainApiConfig::new(base_url).with_timeout(timeout);
    HttpPredictionGateway::with_client(config, client(timeout))
}

fn source(base_url: &str) -> HttpDashboardSource {
    let timeout = Duration::from_secs(5);
    let config = RetainApiConfig::new(base_url).with_timeout(timeout);
    HttpDashboardSource::with_client(config, client(timeout))
}

// =============================================================================
// Prediction
// =============================================================================

#[tokio::test]
async fn scores_profile_through_predict_and_save() {
    let (base_url, server) = serve_canned(
        StatusCode::OK,
        "application/json",
        r#"{"churn_prediction": 1, "risk_score": 72.4, "risk_level": "High"}"#,
    )
    .await;
    let gateway = gateway(&base_url, Duration::from_secs(5));

    let assessment = gateway.score(&CustomerProfile::default()).await.unwrap();

    assert!(assessment.churn_prediction());
    assert_eq!(assessment.risk_score().value(), 72);
    assert_eq!(assessment.risk_level(), Some(RiskLevel::High));

    let request = server.await.unwrap();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.uri.path(), "/predict_and_save");
    let sent = request.json();
    assert_eq!(sent["contract"], "Month-to-month");
    assert_eq!(sent["techsupport"], "No");
    assert_eq!(sent["tenure"], 12);
}

#[tokio::test]
async fn service_error_carries_fastapi_detail() {
    let (base_url, _server) = serve_canned(
        StatusCode::INTERNAL_SERVER_ERROR,
        "application/json",
        r#"{"detail": "Model not loaded"}"#,
    )
    .await;
    let gateway = gateway(&base_url, Duration::from_secs(5));

    let err = gateway.score(&CustomerProfile::default()).await.unwrap_err();

    assert_eq!(err, GatewayError::service(500, "Model not loaded"));
    assert_eq!(err.kind(), GatewayErrorKind::Service);
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let (base_url, _server) = serve_canned(StatusCode::OK, "application/json", r#"{"unexpected": true}"#).await;
    let gateway = gateway(&base_url, Duration::from_secs(5));

    let err = gateway.score(&CustomerProfile::default()).await.unwrap_err();

    assert!(matches!(err, GatewayError::InvalidResponse(_)));
}

#[tokio::test]
async fn silent_service_times_out() {
    let app = Router::new().route(
        "/predict_and_save",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK
        }),
    );
    let base_url = spawn_server(app).await;
    let gateway = gateway(&base_url, Duration::from_secs(1));

    let err = gateway.score(&CustomerProfile::default()).await.unwrap_err();

    assert_eq!(err, GatewayError::timeout(1));
    assert_eq!(err.kind(), GatewayErrorKind::Transport);
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn stats_request_carries_only_active_filters() {
    let (base_url, server) = serve_canned(
        StatusCode::OK,
        "application/json",
        r#"{"total_customers": 1695, "churn_rate": "11.3%", "revenue_at_risk": "$9,120.50",
            "chart_data": [{"name": "One year", "Retained": 1307, "Churned": 166}]}"#,
    )
    .await;
    let source = source(&base_url);
    let filters = DashboardFilters::from_raw("One year", "All", -1).unwrap();

    let stats = source.get_stats(&filters).await.unwrap();

    assert_eq!(stats.total_customers, 1695);
    assert_eq!(stats.churn_rate, "11.3%");
    assert_eq!(stats.chart_data[0].total(), 1473);

    let request = server.await.unwrap();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path_and_query(), "/stats?contract=One+year");
}

#[tokio::test]
async fn unfiltered_stats_request_has_no_query() {
    let (base_url, server) = serve_canned(
        StatusCode::OK,
        "application/json",
        r#"{"total_customers": 0, "churn_rate": "0%", "revenue_at_risk": "$0.00"}"#,
    )
    .await;
    let source = source(&base_url);

    source.get_stats(&DashboardFilters::default()).await.unwrap();

    let request = server.await.unwrap();
    assert_eq!(request.uri.path(), "/stats");
    assert!(request.uri.query().map_or(true, str::is_empty));
}

#[tokio::test]
async fn flat_history_is_a_single_page() {
    let (base_url, server) = serve_canned(
        StatusCode::OK,
        "application/json",
        r#"[{"id": 9, "date": "2024-05-01 10:00", "customer": "Two year - DSL",
             "tenure": 60, "monthlyCharges": 45.5, "prediction": 0, "riskScore": 8.2}]"#,
    )
    .await;
    let source = source(&base_url);

    let page = source.get_history(2).await.unwrap();

    assert_eq!(page.pages, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].risk_score.value(), 8);
    assert!(page.items[0].recorded_at.is_some());
    assert!(!page.items[0].churn_predicted);

    let request = server.await.unwrap();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path_and_query(), "/history?page=2");
}

#[tokio::test]
async fn export_returns_csv_body() {
    let csv = "id,date,customer\n1,2024-05-01 10:00,Month-to-month - Fiber optic\n";
    let (base_url, server) = serve_canned(StatusCode::OK, "text/csv", csv).await;
    let source = source(&base_url);

    let body = source.export_history().await.unwrap();

    assert_eq!(body, csv);
    assert_eq!(server.await.unwrap().uri.path(), "/export");
}
