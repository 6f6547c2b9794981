use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

use crate::entity::Identifier;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PublisherId(Uuid);

impl PublisherId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl Identifier for PublisherId {
    fn from_uuid(id: Uuid) -> Self {
        Self::new(id)
    }
}
