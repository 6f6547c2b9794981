mod author;
mod book;
mod publisher;

pub use self::{author::*, book::*, publisher::*};

use axum::http::StatusCode;

/// Marks a value produced by a create so the presenter answers with 201.
#[derive(Debug)]
pub struct Created<T>(pub T);

fn presence(exists: bool) -> StatusCode {
    if exists {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
