use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::EntityVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Author,
    Book,
    Publisher,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Author => write!(f, "Author"),
            EntityKind::Book => write!(f, "Book"),
            EntityKind::Publisher => write!(f, "Publisher"),
        }
    }
}

pub trait Identifier: 'static + Sync + Send + Debug + Clone + Eq + AsRef<Uuid> {
    fn from_uuid(id: Uuid) -> Self;
}

/// Describes one kind of catalog record to the generic service and stores.
pub trait CatalogEntity: 'static + Sync + Send + Debug + Clone + PartialEq {
    type Id: Identifier;
    type NaturalKey: 'static + Sync + Send + Debug + Clone + Eq;

    const KIND: EntityKind;

    fn identifier(&self) -> Option<&Self::Id>;

    fn entity_version(&self) -> &EntityVersion<Self>;

    fn natural_key(&self) -> Self::NaturalKey;

    /// Overwrites every domain field with the incoming values. Identifier and version are kept.
    fn replace_fields(&mut self, incoming: Self);

    /// Used by stores once a record has been written.
    fn with_identity(self, id: Self::Id, version: EntityVersion<Self>) -> Self;
}
