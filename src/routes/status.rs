use std::path::PathBuf;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use mime::Mime;
use serde::Serialize;

use crate::{ServiceState, custom_headers::accept::Accept};

const OFFERED: [Mime; 2] = [mime::TEXT_PLAIN, mime::APPLICATION_JSON];

#[derive(Debug, Clone, Serialize)]
pub struct StatusInfo {
    pub service_version: &'static str,
    pub inline_redirects: usize,
    pub redirects_file: Option<PathBuf>,
    pub log_level: log::LevelFilter,
}

impl StatusInfo {
    fn from_state(ServiceState { config }: ServiceState) -> Self {
        Self {
            service_version: env!("CARGO_PKG_VERSION"),
            inline_redirects: config.paths.len(),
            redirects_file: config.redirects_file,
            log_level: log::max_level(),
        }
    }

    fn to_text(&self) -> String {
        let redirects_file = self
            .redirects_file
            .as_ref()
            .map_or_else(|| "None".to_string(), |path| path.display().to_string());
        format!(
            r#"
        urlshort v{}

        Inline redirects: {};
        Redirects file: {};

        Log level: {}
        "#,
            self.service_version, self.inline_redirects, redirects_file, self.log_level,
        )
    }
}

pub async fn status_route(
    State(state): State<ServiceState>,
    accept: Option<TypedHeader<Accept>>,
) -> Response {
    let info = StatusInfo::from_state(state);
    let format = match accept {
        Some(TypedHeader(accept)) => accept.negotiate(&OFFERED).cloned(),
        None => Some(mime::TEXT_PLAIN),
    };

    match format {
        Some(format) if format == mime::APPLICATION_JSON => Json(info).into_response(),
        Some(_) => info.to_text().into_response(),
        None => (
            StatusCode::NOT_ACCEPTABLE,
            "Status is available as text/plain or application/json",
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        body::{Body, to_bytes},
        extract::Request,
        http::header::{ACCEPT, CONTENT_TYPE},
    };
    use tower::ServiceExt;

    use crate::{routes::create_router, service_config::ServiceConfig};

    use super::*;

    fn state() -> ServiceState {
        ServiceState {
            config: ServiceConfig {
                port: 8080,
                log_level: log::Level::Info,
                redirects_file: Some("redirects.yaml".into()),
                paths: HashMap::from([("/a".to_string(), "https://a.example".to_string())]),
            },
        }
    }

    async fn status(accept: Option<&'static str>) -> Response {
        let mut req = Request::builder().uri("/status");
        if let Some(accept) = accept {
            req = req.header(ACCEPT, accept);
        }
        create_router()
            .with_state(state())
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn plain_text_by_default() {
        let response = status(None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Inline redirects: 1;"));
        assert!(body.contains("Redirects file: redirects.yaml;"));
    }

    #[tokio::test]
    async fn json_on_request() {
        let response = status(Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let info: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(info["service_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(info["inline_redirects"], 1);
        assert_eq!(info["redirects_file"], "redirects.yaml");
    }

    #[tokio::test]
    async fn unsupported_format() {
        let response = status(Some("image/png")).await;
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }
}
