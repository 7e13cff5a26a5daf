use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SETTINGS
        // ========================================
        .route(
            "/api/settings/quick_entry",
            get(handlers::settings::quick_entry),
        )
        // ========================================
        // A025 Size Preset
        // ========================================
        .route("/api/size_presets", get(handlers::a025_size_preset::catalog))
        .route(
            "/api/size_preset",
            get(handlers::a025_size_preset::list_all).post(handlers::a025_size_preset::upsert),
        )
        .route(
            "/api/size_preset/:id",
            get(handlers::a025_size_preset::get_by_id).delete(handlers::a025_size_preset::delete),
        )
        // ========================================
        // A026 Fashion Item
        // ========================================
        .route(
            "/api/fashion_item",
            get(handlers::a026_fashion_item::list_all).post(handlers::a026_fashion_item::create),
        )
        .route(
            "/api/fashion_item/:code",
            get(handlers::a026_fashion_item::get_by_code),
        )
        // ========================================
        // USECASES
        // ========================================
        .route(
            "/api/u508/create_fashion_items",
            post(handlers::usecases::u508_create_items),
        )
        .route(
            "/api/u510/create_variants_from_grid",
            post(handlers::usecases::u510_create_variants),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_quick_entry_settings() {
        let (status, json) = send(Method::GET, "/api/settings/quick_entry", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["preview_limit"], 5);
    }

    #[tokio::test]
    async fn test_create_items_without_sizes_is_bad_request() {
        let body = serde_json::json!({
            "item_code": "D100",
            "item_group": "Dresses",
            "brand": "",
            "color": "Red",
            "sizes": ""
        });
        let (status, json) = send(Method::POST, "/api/u508/create_fashion_items", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "At least one size is required");
    }

    #[tokio::test]
    async fn test_size_grid_unknown_template_is_not_found() {
        let body = serde_json::json!({
            "template_item": "NO-SUCH-TEMPLATE",
            "color": "Red",
            "sizes": "S"
        });
        let (status, json) =
            send(Method::POST, "/api/u510/create_variants_from_grid", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Item NO-SUCH-TEMPLATE not found");
    }
}
