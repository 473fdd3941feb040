//! One structured "request completed" event per request, emitted after the
//! downstream service resolves. Severity follows the status class so 4xx and
//! 5xx responses surface in filtered logs without a separate error path.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::web::trace_ctx::TraceId;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct RequestFacts {
    method: String,
    route: String,
    trace_id: String,
}

fn emit(facts: &RequestFacts, status: StatusCode, duration_us: u64) {
    let status = status.as_u16();
    if status >= 500 {
        error!(
            method = %facts.method,
            route = %facts.route,
            status,
            duration_us,
            trace_id = %facts.trace_id,
            "request completed"
        );
    } else if status >= 400 {
        warn!(
            method = %facts.method,
            route = %facts.route,
            status,
            duration_us,
            trace_id = %facts.trace_id,
            "request completed"
        );
    } else {
        info!(
            method = %facts.method,
            route = %facts.route,
            status,
            duration_us,
            trace_id = %facts.trace_id,
            "request completed"
        );
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let facts = RequestFacts {
            method: req.method().to_string(),
            route: req.path().to_string(),
            trace_id: req
                .extensions()
                .get::<TraceId>()
                .map(|id| id.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            emit(&facts, status, start.elapsed().as_micros() as u64);

            result
        })
    }
}
