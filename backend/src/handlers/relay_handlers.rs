use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    Json,
};
use serde_json::{json, Value};

use crate::AppState;

fn relay_failure() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"success": false, "error": "Failed to submit form"})),
    )
}

/// Forwards a form submission to the webhook unchanged. Bad request bodies,
/// upstream errors and unreachable upstreams all answer with the same 500.
pub async fn relay_submission(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let form = uri.path();
    let body = match payload {
        Ok(Json(body)) => body,
        Err(err) => {
            tracing::error!("Failed to parse {} submission: {}", form, err);
            return Err(relay_failure());
        }
    };

    match state.webhook.forward(&body).await {
        Ok(data) => {
            tracing::info!("Relayed {} submission to webhook", form);
            Ok(Json(json!({"success": true, "data": data})))
        }
        Err(e) => {
            tracing::error!("Failed to relay {} submission: {}", form, e);
            Err(relay_failure())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::webhook::WebhookClient;
    use axum::{body::Body, http::Request, routing::post, Router};
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;
    use tower::ServiceExt;
    use url::Url;

    /// Raw request bodies as the upstream saw them.
    type Received = Arc<Mutex<Vec<String>>>;

    /// Stand-in for the automation webhook on a random local port.
    async fn spawn_upstream(status: StatusCode, reply: &'static str) -> (Url, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let app = Router::new().route(
            "/webhook",
            post(move |body: String| {
                let sink = sink.clone();
                async move {
                    sink.lock().await.push(body);
                    (status, [("content-type", "application/json")], reply)
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let url = Url::parse(&format!("http://{}/webhook", addr)).unwrap();
        (url, received)
    }

    fn relay_app(url: Url) -> Router {
        let webhook = WebhookClient::new(url, Duration::from_secs(5)).unwrap();
        crate::build_router(Arc::new(AppState { webhook }), None)
    }

    async fn post_json(app: Router, path: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn join_body() -> Value {
        json!({
            "name": "Kwame",
            "email": "kwame@acme.com",
            "engagementType": "Build with us",
            "bio": "",
            "timestamp": "2025-03-01T09:30:00.000Z"
        })
    }

    #[tokio::test]
    async fn forwards_body_unchanged_and_wraps_upstream_data() {
        let (url, received) = spawn_upstream(StatusCode::OK, r#"{"id": 42}"#).await;

        let (status, body) = post_json(relay_app(url), "/api/join", join_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": {"id": 42}}));
        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(serde_json::from_str::<Value>(&received[0]).unwrap(), join_body());
    }

    #[tokio::test]
    async fn forwarded_body_keeps_key_order() {
        let (url, received) = spawn_upstream(StatusCode::OK, "{}").await;
        let raw = r#"{"timestamp":"2025-03-01T09:30:00.000Z","name":"Kwame","email":"kwame@acme.com","engagementType":"Build with us","bio":""}"#;

        let (status, _) = post_json(relay_app(url), "/api/join", raw.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*received.lock().await, vec![raw.to_string()]);
    }

    #[tokio::test]
    async fn non_json_upstream_reply_becomes_empty_data() {
        let (url, _) = spawn_upstream(StatusCode::OK, "Workflow was started").await;

        let (status, body) = post_json(relay_app(url), "/api/service-inquiry", join_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": {}}));
    }

    #[tokio::test]
    async fn upstream_error_status_is_a_failure() {
        let (url, received) = spawn_upstream(StatusCode::BAD_GATEWAY, "{}").await;

        let (status, body) = post_json(relay_app(url), "/api/start-project", join_body().to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "error": "Failed to submit form"}));
        assert_eq!(received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_the_same_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{}/webhook", addr)).unwrap();

        let (status, body) = post_json(relay_app(url), "/api/join", join_body().to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "error": "Failed to submit form"}));
    }

    #[tokio::test]
    async fn unparseable_body_is_not_forwarded() {
        let (url, received) = spawn_upstream(StatusCode::OK, "{}").await;

        let (status, body) = post_json(relay_app(url), "/api/join", "{not json".to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(received.lock().await.is_empty());
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (url, _) = spawn_upstream(StatusCode::OK, "{}").await;
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();

        let response = relay_app(url).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
