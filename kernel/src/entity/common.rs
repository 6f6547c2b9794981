mod catalog;
mod operation;
mod version;

pub use self::{catalog::*, operation::*, version::*};
