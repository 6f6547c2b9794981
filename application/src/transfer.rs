mod author;
mod book;
mod publisher;

pub use self::{author::*, book::*, publisher::*};
use kernel::prelude::entity::CatalogEntity;

/// A public representation bound to the entity kind it mirrors.
pub trait CatalogDto: 'static + Sync + Send + Sized + From<Self::Entity> {
    type Entity: CatalogEntity + From<Self>;

    fn without_id(self) -> Self;
}

/// Absence propagates: `None` maps to `None`.
pub fn to_dto<D: CatalogDto>(entity: Option<D::Entity>) -> Option<D> {
    entity.map(D::from)
}
