use error_stack::ResultExt;
use serde::Deserialize;

use kernel::prelude::entity::{PageNumber, PageSize, Pagination};
use kernel::KernelError;

use crate::error::FieldViolation;
use crate::request::violation;

#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    page: Option<u32>,
    size: Option<u32>,
}

impl PageRequest {
    pub fn into_parts(
        self,
    ) -> error_stack::Result<(Option<PageNumber>, Option<PageSize>), KernelError> {
        let size = self
            .size
            .map(|size| PageSize::new(size).ok_or_else(|| violation("size", "must be positive")))
            .transpose()?;
        let number = self.page.map(PageNumber::new);
        if let (Some(number), Some(size)) = (number, size) {
            Pagination::new(number, size)
                .offset()
                .attach_printable_lazy(|| FieldViolation {
                    field: "page",
                    reason: "is out of range for this size",
                })?;
        }
        Ok((number, size))
    }
}
