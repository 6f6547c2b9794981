use uuid::Uuid;

use kernel::prelude::entity::{
    DestructPublisher, EntityVersion, Publisher, PublisherAddress, PublisherCity, PublisherId,
    PublisherName, PublisherState, PublisherZipCode,
};

use crate::transfer::CatalogDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherDto {
    pub id: Option<Uuid>,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl From<Publisher> for PublisherDto {
    fn from(value: Publisher) -> Self {
        let DestructPublisher {
            id,
            name,
            address,
            city,
            state,
            zip_code,
            ..
        } = value.into_destruct();
        Self {
            id: id.map(Uuid::from),
            name: name.into(),
            address: address.map(String::from),
            city: city.map(String::from),
            state: state.map(String::from),
            zip_code: zip_code.map(String::from),
        }
    }
}

impl From<PublisherDto> for Publisher {
    fn from(value: PublisherDto) -> Self {
        Publisher::new(
            value.id.map(PublisherId::new),
            PublisherName::new(value.name),
            value.address.map(PublisherAddress::new),
            value.city.map(PublisherCity::new),
            value.state.map(PublisherState::new),
            value.zip_code.map(PublisherZipCode::new),
            EntityVersion::Nothing,
        )
    }
}

impl CatalogDto for PublisherDto {
    type Entity = Publisher;

    fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::Publisher;

    use crate::transfer::PublisherDto;

    #[test]
    fn optional_fields_survive_round_trip() {
        let dto = PublisherDto {
            id: None,
            name: "Tor".to_string(),
            address: None,
            city: Some("New York".to_string()),
            state: None,
            zip_code: Some("10010".to_string()),
        };
        assert_eq!(PublisherDto::from(Publisher::from(dto.clone())), dto);
    }
}
