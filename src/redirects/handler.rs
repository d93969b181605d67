use std::{
    collections::HashMap,
    convert::Infallible,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use tower::{Service, ServiceExt};

use super::{
    record::{DecodeError, RedirectFormat},
    table::RedirectTable,
};
use crate::responses::short_link_redirect::ShortLinkRedirect;

/// Redirects requests whose path is in the table and hands every other
/// request to `fallback` untouched.
///
/// The handler is itself a [`Service`], so it can be the fallback of another
/// `RedirectHandler` or mounted on a router with
/// [`axum::Router::fallback_service`].
#[derive(Debug, Clone)]
pub struct RedirectHandler<F> {
    table: RedirectTable,
    fallback: F,
}

impl<F> RedirectHandler<F> {
    pub fn new(table: RedirectTable, fallback: F) -> Self {
        if table.is_empty() {
            log::warn!("Redirect table is empty, all requests go to the fallback");
        } else {
            log::info!("Serving {} redirects", table.len());
        }
        Self { table, fallback }
    }

    pub fn from_map(paths: HashMap<String, String>, fallback: F) -> Self {
        Self::new(paths.into(), fallback)
    }

    /// Builds the handler from a redirect document.
    ///
    /// Fails without producing a handler if the document does not decode.
    pub fn from_document(
        document: &[u8],
        format: RedirectFormat,
        fallback: F,
    ) -> Result<Self, DecodeError> {
        let table = format.decode(document)?.into_iter().collect();
        Ok(Self::new(table, fallback))
    }
}

impl<F> Service<Request> for RedirectHandler<F>
where
    F: Service<Request, Error = Infallible> + Clone + Send + 'static,
    F::Response: IntoResponse,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let path = req.uri().path();

        if let Some(location) = self.table.get(path) {
            log::debug!("Redirecting `{path}` to `{location}`");
            let response = ShortLinkRedirect::new(location).into_response();
            return Box::pin(async move { Ok(response) });
        }

        log::debug!("No redirect for `{path}`, delegating to fallback");
        let fallback = self.fallback.clone();
        Box::pin(async move { Ok(fallback.oneshot(req).await?.into_response()) })
    }
}
