use std::fmt::Display;

use error_stack::Context;
use uuid::Uuid;

use crate::entity::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    NotFound { kind: EntityKind, id: Uuid },
    AlreadyExists { kind: EntityKind },
    Validation,
    Configuration,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound { kind, id } => write!(f, "{kind} with id {id} was not found"),
            KernelError::AlreadyExists { kind } => write!(f, "{kind} already exists"),
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::Configuration => write!(f, "Invalid configuration"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
