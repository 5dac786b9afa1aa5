//! Landing Page

use axum::response::Html;

// The landing page is compiled in so `/` works without `server.static_dir`;
// its stylesheet and script are served from that directory under `/static`.
const INDEX_HTML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../static/index.html"
));

/// Serve the chat landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{body_string, sample_router};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_home_page() {
        let response = sample_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        assert!(body_string(response).await.contains("Chatbot"));
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let response = sample_router()
            .oneshot(Request::get("/static/chat.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("/chat"));
    }

    #[tokio::test]
    async fn test_missing_static_asset() {
        let response = sample_router()
            .oneshot(Request::get("/static/nope.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
