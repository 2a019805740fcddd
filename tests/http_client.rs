//! Drives `ApiClient` over real HTTP against a local axum backend.

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use polaris::ApiError;
use polaris::http::ApiClient;
use polaris::http::native::ReqwestTransport;
use polaris::navigation::Navigator;
use polaris::session::SessionStore;
use polaris::storage::{KeyValueStore, MemoryStore, keys};
use serde_json::{Value, json};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct CountingNavigator {
    redirects: Cell<usize>,
}

impl Navigator for CountingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.set(self.redirects.get() + 1);
    }
}

async fn list_customers(headers: HeaderMap) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer live-token");
    if !authorized {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "missing token"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": [{"id": "C1", "customername": "Acme"}],
            "total": 1,
            "limit": 10,
            "page": 1
        })),
    )
}

async fn upsert_customer(Json(body): Json<Value>) -> impl IntoResponse {
    if body["customername"].as_str().unwrap_or_default().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "customername is required"})),
        );
    }
    (StatusCode::OK, Json(json!({"message": "saved", "id": "C9"})))
}

async fn delete_customer() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "token expired"})))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, "upstream down")
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/v1/customer/get-all-customer", get(list_customers))
        .route("/v1/customer/add-update-customer", post(upsert_customer))
        .route("/v1/customer/delete-customer", delete(delete_customer))
        .route("/v1/broken", get(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    format!("http://{}/v1", addr)
}

fn client(base_url: &str) -> (ApiClient, Rc<MemoryStore>, Rc<CountingNavigator>) {
    let storage = Rc::new(MemoryStore::with_entries([(keys::AUTH_TOKEN, "live-token")]));
    let session = Rc::new(SessionStore::new(storage.clone()));
    let navigator = Rc::new(CountingNavigator::default());
    let transport = ReqwestTransport::new(Duration::from_secs(5)).expect("Failed to build transport");
    let client = ApiClient::new(base_url, Rc::new(transport), session, navigator.clone());
    (client, storage, navigator)
}

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let base_url = spawn_backend().await;
    let (client, _, _) = client(&base_url);

    let body = client.get("/customer/get-all-customer").await.unwrap();

    assert_eq!(body["data"][0]["customername"], "Acme");
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_error_bodies_are_normalized() {
    let base_url = spawn_backend().await;
    let (client, _, _) = client(&base_url);

    let err = client
        .post("/customer/add-update-customer", &json!({"customername": ""}))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 400,
            message: "customername is required".to_string()
        }
    );

    let err = client.get("/broken").await.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status code 502");

    let saved = client
        .post("/customer/add-update-customer", &json!({"customername": "Acme"}))
        .await
        .unwrap();
    assert_eq!(saved["id"], "C9");
}

#[tokio::test]
async fn test_unauthorized_clears_credential_and_redirects() {
    let base_url = spawn_backend().await;
    let (client, storage, navigator) = client(&base_url);

    let err = client
        .delete_with_body("/customer/delete-customer", &json!({"id": "C1"}))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Unauthorized("token expired".to_string()));
    assert_eq!(navigator.redirects.get(), 1);
    assert_eq!(storage.get(keys::AUTH_TOKEN), None);

    // Without a credential the list route now refuses the request.
    let err = client.get("/customer/get-all-customer").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(navigator.redirects.get(), 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let (client, _, navigator) = client("http://127.0.0.1:9/v1");

    let err = client.get("/customer/get-all-customer").await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(navigator.redirects.get(), 0);
}
