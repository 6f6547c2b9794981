use uuid::Uuid;

use kernel::prelude::entity::{Book, BookId, BookIsbn, BookTitle, DestructBook, EntityVersion};

use crate::transfer::CatalogDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: Option<Uuid>,
    pub isbn: String,
    pub title: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id, isbn, title, ..
        } = value.into_destruct();
        Self {
            id: id.map(Uuid::from),
            isbn: isbn.into(),
            title: title.into(),
        }
    }
}

impl From<BookDto> for Book {
    fn from(value: BookDto) -> Self {
        Book::new(
            value.id.map(BookId::new),
            BookIsbn::new(value.isbn),
            BookTitle::new(value.title),
            EntityVersion::Nothing,
        )
    }
}

impl CatalogDto for BookDto {
    type Entity = Book;

    fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::prelude::entity::{Book, BookIsbn, BookTitle};

    use crate::transfer::{to_dto, BookDto, CatalogDto};

    #[test]
    fn round_trip_keeps_domain_fields() {
        let dto = BookDto {
            id: Some(Uuid::new_v4()),
            isbn: "978-0765326355".to_string(),
            title: "The Way of Kings".to_string(),
        };
        let entity = Book::from(dto.clone());
        assert_eq!(entity.isbn(), &BookIsbn::new("978-0765326355"));
        assert_eq!(entity.title(), &BookTitle::new("The Way of Kings"));
        assert_eq!(to_dto::<BookDto>(Some(entity)), Some(dto));
    }

    #[test]
    fn without_id_only_drops_id() {
        let dto = BookDto {
            id: Some(Uuid::new_v4()),
            isbn: "isbn".to_string(),
            title: "title".to_string(),
        };
        let detached = dto.clone().without_id();
        assert_eq!(detached.id, None);
        assert_eq!(detached.isbn, dto.isbn);
        assert_eq!(detached.title, dto.title);
    }
}
