//! API routes module

pub mod health;

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductRepository, ProductService};

use crate::state::AppState;

/// Create all routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    let repository =
        MongoProductRepository::with_collection(&state.db, &state.config.products_collection);
    product_routes(repository)
}

fn product_routes<R: ProductRepository + 'static>(repository: R) -> Router {
    Router::new().nest("/products", handlers::router(ProductService::new(repository)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_products::{InMemoryProductRepository, Product};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt; // For oneshot()

    async fn app() -> Router {
        let health = Router::new();
        axum_helpers::create_router::<ApiDoc>(product_routes(InMemoryProductRepository::new()), health)
            .await
            .unwrap()
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_product_routes_under_api_prefix() {
        let app = app().await;

        let (status, body) = send(&app, "GET", "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({ "name": "New Product", "quantity": 5, "price": 50 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Product = serde_json::from_value(body).unwrap();
        let item_uri = format!("/api/products/{}", created.id);

        let (status, body) = send(&app, "GET", &item_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "New Product");

        let (status, body) = send(
            &app,
            "PUT",
            &item_uri,
            Some(json!({ "name": "Updated Product", "quantity": 15, "price": 150 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_id"], created.id.to_string());
        assert_eq!(body["quantity"], 15);

        let (status, body) = send(&app, "DELETE", &item_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Product deleted successfully" }));

        let (status, _) = send(&app, "GET", &item_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_under_api_prefix_is_not_found() {
        let app = app().await;

        let (status, body) = send(&app, "GET", "/api/products/1234567890", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_product_paths() {
        let app = app().await;

        let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/api/products").is_some());
        assert!(doc["paths"].get("/api/products/{id}").is_some());
    }
}
