use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::AuthorDto;

use crate::controller::Exhaust;
use crate::response::{presence, Created};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    id: Option<Uuid>,
    first_name: String,
    last_name: String,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct AuthorPresenter;

impl Exhaust<()> for AuthorPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<bool> for AuthorPresenter {
    type To = StatusCode;
    fn emit(&self, input: bool) -> Self::To {
        presence(input)
    }
}

impl Exhaust<AuthorDto> for AuthorPresenter {
    type To = AuthorResponse;
    fn emit(&self, input: AuthorDto) -> Self::To {
        AuthorResponse::from(input)
    }
}

impl Exhaust<Created<AuthorDto>> for AuthorPresenter {
    type To = (StatusCode, Json<AuthorResponse>);
    fn emit(&self, input: Created<AuthorDto>) -> Self::To {
        (StatusCode::CREATED, Json(AuthorResponse::from(input.0)))
    }
}

impl Exhaust<Vec<AuthorDto>> for AuthorPresenter {
    type To = Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        Json(input.into_iter().map(AuthorResponse::from).collect())
    }
}
