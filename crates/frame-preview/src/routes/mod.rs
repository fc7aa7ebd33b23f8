//! HTTP transport for the rendered page.
//!
//! ## Routes
//!
//! - `GET /` - The frame-embedding document
//! - `GET /health` - Health check (JSON)

mod health;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(document))
        .route("/health", get(health::health_check))
        .with_state(state)
}

/// Serve the pre-rendered document.
async fn document(State(state): State<AppState>) -> Response {
    let page = &state.page;
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    if let Ok(val) = HeaderValue::from_str(&page.etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, page.html.clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const HTML: &str = "<!DOCTYPE html><html><body>frame</body></html>";

    fn app() -> Router {
        router(AppState::new(HTML.to_string()))
    }

    #[tokio::test]
    async fn serves_document() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(response.headers().contains_key(header::ETAG));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], HTML.as_bytes());
    }

    #[tokio::test]
    async fn etag_is_stable_across_requests() {
        let app = app();
        let first = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(first.headers()[header::ETAG], second.headers()[header::ETAG]);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "frame-preview");
        assert_eq!(json["document_bytes"], HTML.len());
        assert_eq!(
            json["document_etag"],
            crate::state::RenderedPage::new(HTML.to_string()).etag
        );
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = app()
            .oneshot(Request::get("/other").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
