//! Readiness endpoint backed by a MongoDB ping

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use mongodb::Client;
use serde_json::Value;

use crate::state::AppState;

type ReadyResponse = (StatusCode, Json<Value>);

async fn ready(State(client): State<Client>) -> Result<ReadyResponse, ReadyResponse> {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async {
        database::mongodb::check_health(&client)
            .await
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}

fn ready_router(client: Client) -> Router {
    Router::new().route("/ready", get(ready)).with_state(client)
}

/// Creates a router with the /ready endpoint
pub fn router(state: &AppState) -> Router {
    ready_router(state.mongo_client.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use mongodb::options::ClientOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ready_reports_disconnected_mongodb() {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1").await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(200));
        let client = Client::with_options(options).unwrap();

        let response = ready_router(client)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["mongodb"], "disconnected");
    }
}
