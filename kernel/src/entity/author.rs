mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::common::{CatalogEntity, EntityKind, EntityVersion};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Author {
    id: Option<AuthorId>,
    first_name: AuthorFirstName,
    last_name: AuthorLastName,
    version: EntityVersion<Author>,
}

impl Author {
    pub fn new(
        id: Option<AuthorId>,
        first_name: AuthorFirstName,
        last_name: AuthorLastName,
        version: EntityVersion<Author>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            version,
        }
    }
}

impl CatalogEntity for Author {
    type Id = AuthorId;
    type NaturalKey = (AuthorFirstName, AuthorLastName);

    const KIND: EntityKind = EntityKind::Author;

    fn identifier(&self) -> Option<&AuthorId> {
        self.id.as_ref()
    }

    fn entity_version(&self) -> &EntityVersion<Self> {
        &self.version
    }

    fn natural_key(&self) -> Self::NaturalKey {
        (self.first_name.clone(), self.last_name.clone())
    }

    fn replace_fields(&mut self, incoming: Self) {
        let DestructAuthor {
            first_name,
            last_name,
            ..
        } = incoming.into_destruct();
        self.substitute(|author| {
            *author.first_name = first_name;
            *author.last_name = last_name;
        });
    }

    fn with_identity(self, id: AuthorId, version: EntityVersion<Self>) -> Self {
        self.reconstruct(|author| {
            author.id = Some(id);
            author.version = version;
        })
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::entity::{
        Author, AuthorFirstName, AuthorId, AuthorLastName, CatalogEntity, EntityVersion,
    };

    fn author(id: Option<AuthorId>, first: &str, last: &str) -> Author {
        Author::new(
            id,
            AuthorFirstName::new(first),
            AuthorLastName::new(last),
            EntityVersion::Nothing,
        )
    }

    #[test]
    fn replace_fields_keeps_identity() {
        let id = AuthorId::new(Uuid::new_v4());
        let mut stored = author(None, "Brandon", "Sanderson")
            .with_identity(id.clone(), EntityVersion::new(3));

        let other_id = AuthorId::new(Uuid::new_v4());
        stored.replace_fields(author(Some(other_id), "Robert", "Jordan"));

        assert_eq!(stored.id(), &Some(id));
        assert_eq!(stored.version(), &EntityVersion::new(3));
        assert_eq!(stored.first_name().as_ref(), "Robert");
        assert_eq!(stored.last_name().as_ref(), "Jordan");
    }

    #[test]
    fn natural_key_is_name_pair() {
        let a = author(None, "Brandon", "Sanderson");
        let b = author(Some(AuthorId::new(Uuid::new_v4())), "Brandon", "Sanderson");
        let c = author(None, "brandon", "Sanderson");
        assert_eq!(a.natural_key(), b.natural_key());
        assert_ne!(a.natural_key(), c.natural_key());
    }
}
