use serde::Deserialize;
use uuid::Uuid;

use application::transfer::AuthorDto;
use kernel::prelude::entity::{PageNumber, PageSize};
use kernel::KernelError;

use crate::controller::TryIntake;
use crate::request::{required, PageRequest};

/// Body of both create and replace. A body id is accepted but never used.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[allow(dead_code)]
    id: Option<Uuid>,
    first_name: Option<String>,
    last_name: Option<String>,
}

pub struct AuthorTransformer;

impl TryIntake<PageRequest> for AuthorTransformer {
    type To = (Option<PageNumber>, Option<PageSize>);
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: PageRequest) -> Result<Self::To, Self::Error> {
        input.into_parts()
    }
}

impl TryIntake<AuthorRequest> for AuthorTransformer {
    type To = AuthorDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: AuthorRequest) -> Result<Self::To, Self::Error> {
        Ok(AuthorDto {
            id: None,
            first_name: required("firstName", input.first_name)?,
            last_name: required("lastName", input.last_name)?,
        })
    }
}

impl TryIntake<(Uuid, AuthorRequest)> for AuthorTransformer {
    type To = (Uuid, AuthorDto);
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: (Uuid, AuthorRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        let dto = TryIntake::<AuthorRequest>::emit(self, input)?;
        Ok((id, AuthorDto { id: Some(id), ..dto }))
    }
}
