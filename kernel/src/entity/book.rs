mod id;
mod isbn;
mod title;

pub use self::{id::*, isbn::*, title::*};
use crate::entity::common::{CatalogEntity, EntityKind, EntityVersion};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: Option<BookId>,
    isbn: BookIsbn,
    title: BookTitle,
    version: EntityVersion<Book>,
}

impl Book {
    pub fn new(
        id: Option<BookId>,
        isbn: BookIsbn,
        title: BookTitle,
        version: EntityVersion<Book>,
    ) -> Self {
        Self {
            id,
            isbn,
            title,
            version,
        }
    }
}

impl CatalogEntity for Book {
    type Id = BookId;
    type NaturalKey = BookIsbn;

    const KIND: EntityKind = EntityKind::Book;

    fn identifier(&self) -> Option<&BookId> {
        self.id.as_ref()
    }

    fn entity_version(&self) -> &EntityVersion<Self> {
        &self.version
    }

    fn natural_key(&self) -> BookIsbn {
        self.isbn.clone()
    }

    fn replace_fields(&mut self, incoming: Self) {
        let DestructBook { isbn, title, .. } = incoming.into_destruct();
        self.substitute(|book| {
            *book.isbn = isbn;
            *book.title = title;
        });
    }

    fn with_identity(self, id: BookId, version: EntityVersion<Self>) -> Self {
        self.reconstruct(|book| {
            book.id = Some(id);
            book.version = version;
        })
    }
}
