use error_stack::{Report, ResultExt};

use kernel::KernelError;

pub mod database;
pub mod error;

pub fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context(KernelError::Configuration)
        .attach_printable_lazy(|| format!("Failed to read environment variable {key}"))
}

/// `None` when the variable is unset; other read failures are reported.
pub fn env_opt(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Configuration)
            .attach_printable(format!("Failed to read environment variable {key}"))),
    }
}
