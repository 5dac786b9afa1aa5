//! Prometheus Metrics Route

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;

/// Render metrics in Prometheus text format, or 404 when disabled
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sample_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_metrics_disabled() {
        let response = sample_router()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_metrics_enabled() {
        use crate::routes::test_support::static_dir;
        use crate::{create_router, AppState};
        use metrics_exporter_prometheus::PrometheusBuilder;
        use rule_store::RuleSet;
        use std::sync::Arc;

        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::new(RuleSet::default(), static_dir()).with_metrics(handle);

        let response = create_router(Arc::new(state))
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
