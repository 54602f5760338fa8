//! Route handlers for the QA API.

pub mod currency;
pub mod extract;
pub mod query;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
///
/// Each endpoint answers both with and without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/query/", get(query::query))
        .route("/query", get(query::query))
        .route("/currency/", post(currency::currency))
        .route("/currency", post(currency::currency))
        .route("/extract-product/", post(extract::extract_product))
        .route("/extract-product", post(extract::extract_product))
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::response::Response;
    use mock_brain::ScriptedBackend;
    use tower::ServiceExt;

    use crate::routes::test_support::{body_json, state_with};

    const PRODUCT_JSON: &str = r#"{"product_name":"Mug","category":"Kitchen","features":["dishwasher safe"],"colors":["red"],"pricing":{"regular_price":12.0,"sale_price":9.5,"currency":"USD"}}"#;

    async fn send(backend: ScriptedBackend, method: Method, uri: &str) -> Response {
        let app = router().with_state(state_with(backend));
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_query_with_and_without_trailing_slash() {
        for uri in ["/query/?question=hi", "/query?question=hi"] {
            let response = send(ScriptedBackend::new().then_text("Hello!"), Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let body = body_json(response).await;
            assert_eq!(body["answer"], "Hello!", "{uri}");
            assert!(body.get("status").is_none(), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_successful_responses_never_carry_status() {
        let cases = [
            (
                ScriptedBackend::new().then_text("42"),
                Method::GET,
                "/query?question=answer",
            ),
            (
                ScriptedBackend::new().then_text("No conversion needed."),
                Method::POST,
                "/currency?question=hello",
            ),
            (
                ScriptedBackend::new().then_text(PRODUCT_JSON),
                Method::POST,
                "/extract-product?description=red%20mug",
            ),
        ];

        for (backend, method, uri) in cases {
            let response = send(backend, method, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let body = body_json(response).await;
            assert!(body.get("status").is_none(), "{uri}: {body}");
        }
    }

    #[tokio::test]
    async fn test_rejected_query_parameter_is_error_envelope() {
        for uri in ["/query/", "/query?q=hi"] {
            let response = send(ScriptedBackend::new(), Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let body = body_json(response).await;
            assert_eq!(body["status"], "error", "{uri}");
            assert!(body["message"].as_str().unwrap().contains("question"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_post_routes_with_and_without_trailing_slash() {
        for uri in ["/currency/?question=hi", "/currency?question=hi"] {
            let response = send(ScriptedBackend::new().then_text("Hi."), Method::POST, uri).await;
            assert_eq!(body_json(response).await["answer"], "Hi.", "{uri}");
        }

        for uri in [
            "/extract-product/?description=mug",
            "/extract-product?description=mug",
        ] {
            let response = send(ScriptedBackend::new().then_text(PRODUCT_JSON), Method::POST, uri).await;
            assert_eq!(
                body_json(response).await["product_data"]["product_name"],
                "Mug",
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_only_declared_method_is_routed() {
        let cases = [
            (Method::POST, "/query/?question=hi"),
            (Method::GET, "/currency/?question=hi"),
            (Method::GET, "/extract-product?description=mug"),
        ];

        for (method, uri) in cases {
            let response = send(ScriptedBackend::new(), method, uri).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = send(ScriptedBackend::new(), Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
