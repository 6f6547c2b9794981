use serde::Deserialize;
use uuid::Uuid;

use application::transfer::BookDto;
use kernel::prelude::entity::{PageNumber, PageSize};
use kernel::KernelError;

use crate::controller::TryIntake;
use crate::request::{required, PageRequest};

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    #[allow(dead_code)]
    id: Option<Uuid>,
    isbn: Option<String>,
    title: Option<String>,
}

pub struct BookTransformer;

impl TryIntake<PageRequest> for BookTransformer {
    type To = (Option<PageNumber>, Option<PageSize>);
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: PageRequest) -> Result<Self::To, Self::Error> {
        input.into_parts()
    }
}

impl TryIntake<BookRequest> for BookTransformer {
    type To = BookDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: BookRequest) -> Result<Self::To, Self::Error> {
        Ok(BookDto {
            id: None,
            isbn: required("isbn", input.isbn)?,
            title: required("title", input.title)?,
        })
    }
}

impl TryIntake<(Uuid, BookRequest)> for BookTransformer {
    type To = (Uuid, BookDto);
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: (Uuid, BookRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        let dto = TryIntake::<BookRequest>::emit(self, input)?;
        Ok((id, BookDto { id: Some(id), ..dto }))
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::controller::TryIntake;
    use crate::request::{BookRequest, BookTransformer};

    #[test]
    fn blank_isbn_is_invalid() {
        let request: BookRequest =
            serde_json::from_str(r#"{"isbn":" ","title":"The Way of Kings"}"#).unwrap();
        let report = TryIntake::<BookRequest>::emit(&BookTransformer, request).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
    }
}
