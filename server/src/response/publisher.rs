use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::PublisherDto;

use crate::controller::Exhaust;
use crate::response::{presence, Created};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherResponse {
    id: Option<Uuid>,
    name: String,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
}

impl From<PublisherDto> for PublisherResponse {
    fn from(value: PublisherDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address,
            city: value.city,
            state: value.state,
            zip_code: value.zip_code,
        }
    }
}

impl IntoResponse for PublisherResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct PublisherPresenter;

impl Exhaust<()> for PublisherPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<bool> for PublisherPresenter {
    type To = StatusCode;
    fn emit(&self, input: bool) -> Self::To {
        presence(input)
    }
}

impl Exhaust<PublisherDto> for PublisherPresenter {
    type To = PublisherResponse;
    fn emit(&self, input: PublisherDto) -> Self::To {
        PublisherResponse::from(input)
    }
}

impl Exhaust<Created<PublisherDto>> for PublisherPresenter {
    type To = (StatusCode, Json<PublisherResponse>);
    fn emit(&self, input: Created<PublisherDto>) -> Self::To {
        (StatusCode::CREATED, Json(PublisherResponse::from(input.0)))
    }
}

impl Exhaust<Vec<PublisherDto>> for PublisherPresenter {
    type To = Json<Vec<PublisherResponse>>;
    fn emit(&self, input: Vec<PublisherDto>) -> Self::To {
        Json(input.into_iter().map(PublisherResponse::from).collect())
    }
}
