//! Task-local trace context for web requests.
//!
//! The request-trace middleware assigns every request a [`TraceId`] and
//! scopes it into task-local storage for the downstream future, so error
//! rendering and log statements can read it without threading it through
//! call signatures.
//!
//! This module is part of the web boundary and should not be imported by
//! domain code.

use std::cell::RefCell;
use std::fmt;

use tokio::task_local;

/// Identifier tying together all log lines and the response headers of one
/// request. Also stored in request extensions by the trace middleware.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

task_local! {
    static TRACE_ID: RefCell<Option<TraceId>>;
}

/// Trace id of the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().as_ref().map(|id| id.as_str().to_string()))
        .ok()
        .flatten()
        .unwrap_or_else(|| "unknown".to_string())
}

/// Run a future with the given trace id scoped into task-local storage.
pub async fn with_trace_id<F, R>(id: TraceId, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(id)), future).await
}
