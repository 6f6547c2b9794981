use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Compared verbatim; no normalisation of hyphens or case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BookIsbn(String);

impl BookIsbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}
