use std::num::NonZeroU32;

use error_stack::Report;
use vodca::{AsRefln, Fromln, References};

use crate::KernelError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct PageNumber(u32);

impl PageNumber {
    pub fn new(value: u32) -> Self {
        PageNumber(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(PageSize)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, References)]
pub struct Pagination {
    number: PageNumber,
    size: PageSize,
}

impl Pagination {
    pub fn new(number: PageNumber, size: PageSize) -> Self {
        Self { number, size }
    }

    /// Each missing value falls back on its own: number to the first page, size to `default_size`.
    pub fn resolve(
        number: Option<PageNumber>,
        size: Option<PageSize>,
        default_size: PageSize,
    ) -> Self {
        Self {
            number: number.unwrap_or_default(),
            size: size.unwrap_or(default_size),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size.get())
    }

    /// Rows to skip. Fails with `Validation` when the page lies beyond what a store can address.
    pub fn offset(&self) -> error_stack::Result<i64, KernelError> {
        let number = *self.number.as_ref();
        i64::from(number)
            .checked_mul(self.limit())
            .ok_or_else(|| {
                Report::new(KernelError::Validation).attach_printable(format!(
                    "page {number} of size {} is out of range",
                    self.size.get()
                ))
            })
    }
}
