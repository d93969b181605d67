use axum::{Router, http::StatusCode, routing::get};

use crate::{ServiceState, routes::status::status_route};

pub mod status;

async fn hello_route() -> &'static str {
    "Hello, world!"
}

async fn not_found_route() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

/// Routes served for any path that has no redirect.
pub fn create_router() -> Router<ServiceState> {
    log::info!("Building fallback router");
    Router::new()
        .route("/", get(hello_route))
        .route("/status", get(status_route))
        .fallback(not_found_route)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        body::{Body, to_bytes},
        extract::Request,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::service_config::ServiceConfig;

    fn router() -> Router {
        create_router().with_state(ServiceState {
            config: ServiceConfig {
                port: 8080,
                log_level: log::Level::Info,
                redirects_file: None,
                paths: HashMap::new(),
            },
        })
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_says_hello() {
        assert_eq!(get_body("/").await, (StatusCode::OK, "Hello, world!".to_string()));
    }

    #[tokio::test]
    async fn anything_else_is_not_found() {
        assert_eq!(
            get_body("/nowhere").await,
            (StatusCode::NOT_FOUND, "not found".to_string())
        );
    }
}
