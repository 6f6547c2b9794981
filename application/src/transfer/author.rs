use uuid::Uuid;

use kernel::prelude::entity::{
    Author, AuthorFirstName, AuthorId, AuthorLastName, DestructAuthor, EntityVersion,
};

use crate::transfer::CatalogDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            first_name,
            last_name,
            ..
        } = value.into_destruct();
        Self {
            id: id.map(Uuid::from),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(value: AuthorDto) -> Self {
        Author::new(
            value.id.map(AuthorId::new),
            AuthorFirstName::new(value.first_name),
            AuthorLastName::new(value.last_name),
            EntityVersion::Nothing,
        )
    }
}

impl CatalogDto for AuthorDto {
    type Entity = Author;

    fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}
