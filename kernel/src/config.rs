use error_stack::Report;

use crate::entity::PageSize;
use crate::KernelError;

/// Page size applied when a caller asks for a page without giving its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPageSize(PageSize);

impl DefaultPageSize {
    pub fn new(value: i64) -> error_stack::Result<Self, KernelError> {
        u32::try_from(value)
            .ok()
            .and_then(PageSize::new)
            .map(Self)
            .ok_or_else(|| {
                Report::new(KernelError::Configuration).attach_printable(format!(
                    "default page size must be a positive integer, got {value}"
                ))
            })
    }

    pub fn page_size(&self) -> PageSize {
        self.0
    }
}

pub trait DependOnDefaultPageSize: 'static + Sync + Send {
    fn default_page_size(&self) -> &DefaultPageSize;
}
