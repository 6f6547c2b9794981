use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::BookDto;

use crate::controller::Exhaust;
use crate::response::{presence, Created};

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Option<Uuid>,
    isbn: String,
    title: String,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            isbn: value.isbn,
            title: value.title,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<bool> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, input: bool) -> Self::To {
        presence(input)
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Created<BookDto>> for BookPresenter {
    type To = (StatusCode, Json<BookResponse>);
    fn emit(&self, input: Created<BookDto>) -> Self::To {
        (StatusCode::CREATED, Json(BookResponse::from(input.0)))
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Json(input.into_iter().map(BookResponse::from).collect())
    }
}
