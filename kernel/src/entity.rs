mod author;
mod book;
mod common;
mod publisher;

pub use self::{author::*, book::*, common::*, publisher::*};
