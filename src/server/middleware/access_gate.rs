//! Route access gate middleware
//!
//! Classifies every request path and either lets it through or answers
//! with a `307 Temporary Redirect` before any handler runs. The resolved
//! [`Identity`] is stored in the request extensions so handlers and
//! extractors reuse it instead of re-reading cookies.

use std::future::Future;
use std::pin::Pin;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures::future::{ready, Ready};
use tracing::debug;

use crate::auth::{decide, Decision, Identity};

/// Paths served without consulting the route table
///
/// Static assets and the health probe are infrastructure, not pages, so
/// they bypass classification entirely.
pub fn is_exempt(path: &str) -> bool {
    path == "/health" || path == "/favicon.ico" || path == "/static" || path.starts_with("/static/")
}

/// Access gate middleware
pub struct AccessGateMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AccessGateMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGateMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddlewareService { service }))
    }
}

/// Access gate middleware service
pub struct AccessGateMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();

        if is_exempt(&path) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let identity = Identity::from_request_cookies(req.request());

        match decide(&path, &identity) {
            Decision::Allow => {
                // Handlers read the session from extensions, not cookies
                req.extensions_mut().insert(identity);

                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Decision::Redirect(target) => {
                debug!(path = %path, target = %target, "access gate redirect");

                let (request, _payload) = req.into_parts();
                let response = HttpResponse::TemporaryRedirect()
                    .insert_header((header::LOCATION, target))
                    .finish()
                    .map_into_right_body();

                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}
