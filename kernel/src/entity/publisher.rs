mod address;
mod id;
mod name;

pub use self::{address::*, id::*, name::*};
use crate::entity::common::{CatalogEntity, EntityKind, EntityVersion};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Publisher {
    id: Option<PublisherId>,
    name: PublisherName,
    address: Option<PublisherAddress>,
    city: Option<PublisherCity>,
    state: Option<PublisherState>,
    zip_code: Option<PublisherZipCode>,
    version: EntityVersion<Publisher>,
}

impl Publisher {
    pub fn new(
        id: Option<PublisherId>,
        name: PublisherName,
        address: Option<PublisherAddress>,
        city: Option<PublisherCity>,
        state: Option<PublisherState>,
        zip_code: Option<PublisherZipCode>,
        version: EntityVersion<Publisher>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            city,
            state,
            zip_code,
            version,
        }
    }
}

impl CatalogEntity for Publisher {
    type Id = PublisherId;
    type NaturalKey = PublisherName;

    const KIND: EntityKind = EntityKind::Publisher;

    fn identifier(&self) -> Option<&PublisherId> {
        self.id.as_ref()
    }

    fn entity_version(&self) -> &EntityVersion<Self> {
        &self.version
    }

    fn natural_key(&self) -> PublisherName {
        self.name.clone()
    }

    // Optional fields are cleared when the incoming record lacks them.
    fn replace_fields(&mut self, incoming: Self) {
        let DestructPublisher {
            name,
            address,
            city,
            state,
            zip_code,
            ..
        } = incoming.into_destruct();
        self.substitute(|publisher| {
            *publisher.name = name;
            *publisher.address = address;
            *publisher.city = city;
            *publisher.state = state;
            *publisher.zip_code = zip_code;
        });
    }

    fn with_identity(self, id: PublisherId, version: EntityVersion<Self>) -> Self {
        self.reconstruct(|publisher| {
            publisher.id = Some(id);
            publisher.version = version;
        })
    }
}
