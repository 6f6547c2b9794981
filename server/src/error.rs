use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use serde::Serialize;
use uuid::Uuid;

use kernel::prelude::entity::EntityKind;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Attached to `Validation` reports to name the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: &'static str,
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<EntityKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
}

fn status_of(error: &KernelError) -> StatusCode {
    match error {
        KernelError::NotFound { .. } => StatusCode::NOT_FOUND,
        KernelError::AlreadyExists { .. } | KernelError::Concurrency => StatusCode::CONFLICT,
        KernelError::Validation => StatusCode::BAD_REQUEST,
        KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
        KernelError::Configuration | KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ErrorStatus {
    fn body(&self) -> ErrorBody {
        let context = self.0.current_context();
        let (kind, id) = match context {
            KernelError::NotFound { kind, id } => (Some(*kind), Some(*id)),
            KernelError::AlreadyExists { kind } => (Some(*kind), None),
            _ => (None, None),
        };
        let message = match self.0.downcast_ref::<FieldViolation>() {
            Some(violation) => format!("{context}: {violation}"),
            None => context.to_string(),
        };
        ErrorBody { message, kind, id }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let status = status_of(self.0.current_context());
        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
