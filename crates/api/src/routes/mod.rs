//! HTTP Route Handlers

pub mod chat;
pub mod health;
pub mod home;
pub mod metrics;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{create_router, AppState};
    use axum::body::Body;
    use axum::http::Response;
    use axum::Router;
    use rule_store::{Rule, RuleSet};
    use std::sync::Arc;

    pub fn static_dir() -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../static")
    }

    pub fn router_with(rules: Vec<Rule>) -> Router {
        let state = AppState::new(RuleSet::new(rules), static_dir());
        create_router(Arc::new(state))
    }

    pub fn sample_router() -> Router {
        router_with(vec![
            Rule::new(["hello"], "Hi there!"),
            Rule::fallback("Random filler"),
        ])
    }

    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
