mod author;
mod book;
mod page;
mod publisher;

pub use self::{author::*, book::*, page::*, publisher::*};

use error_stack::Report;

use kernel::KernelError;

use crate::error::FieldViolation;

const MAX_LENGTH: usize = 255;

fn violation(field: &'static str, reason: &'static str) -> Report<KernelError> {
    Report::new(KernelError::Validation).attach_printable(FieldViolation { field, reason })
}

fn required(
    field: &'static str,
    value: Option<String>,
) -> error_stack::Result<String, KernelError> {
    match value {
        None => Err(violation(field, "is required")),
        Some(value) if value.trim().is_empty() => Err(violation(field, "must not be blank")),
        Some(value) => bounded(field, value),
    }
}

fn optional(
    field: &'static str,
    value: Option<String>,
) -> error_stack::Result<Option<String>, KernelError> {
    value.map(|value| bounded(field, value)).transpose()
}

fn bounded(field: &'static str, value: String) -> error_stack::Result<String, KernelError> {
    if value.chars().count() > MAX_LENGTH {
        return Err(violation(field, "must be at most 255 characters"));
    }
    Ok(value)
}
