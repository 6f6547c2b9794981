use serde::Deserialize;
use uuid::Uuid;

use application::transfer::PublisherDto;
use kernel::prelude::entity::{PageNumber, PageSize};
use kernel::KernelError;

use crate::controller::TryIntake;
use crate::request::{optional, required, PageRequest};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherRequest {
    #[allow(dead_code)]
    id: Option<Uuid>,
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
}

pub struct PublisherTransformer;

impl TryIntake<PageRequest> for PublisherTransformer {
    type To = (Option<PageNumber>, Option<PageSize>);
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: PageRequest) -> Result<Self::To, Self::Error> {
        input.into_parts()
    }
}

impl TryIntake<PublisherRequest> for PublisherTransformer {
    type To = PublisherDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: PublisherRequest) -> Result<Self::To, Self::Error> {
        Ok(PublisherDto {
            id: None,
            name: required("name", input.name)?,
            address: optional("address", input.address)?,
            city: optional("city", input.city)?,
            state: optional("state", input.state)?,
            zip_code: optional("zipCode", input.zip_code)?,
        })
    }
}

impl TryIntake<(Uuid, PublisherRequest)> for PublisherTransformer {
    type To = (Uuid, PublisherDto);
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: (Uuid, PublisherRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        let dto = TryIntake::<PublisherRequest>::emit(self, input)?;
        Ok((id, PublisherDto { id: Some(id), ..dto }))
    }
}

#[cfg(test)]
mod test {
    use crate::controller::TryIntake;
    use crate::request::{PublisherRequest, PublisherTransformer};

    #[test]
    fn omitted_optionals_are_absent() {
        let request: PublisherRequest =
            serde_json::from_str(r#"{"name":"Tor","zipCode":"10010"}"#).unwrap();
        let dto = TryIntake::<PublisherRequest>::emit(&PublisherTransformer, request).unwrap();
        assert_eq!(dto.name, "Tor");
        assert_eq!(dto.address, None);
        assert_eq!(dto.zip_code.as_deref(), Some("10010"));
    }
}
