use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::CatalogEntity;
use crate::KernelError;

#[async_trait::async_trait]
pub trait EntityModifier<E: CatalogEntity>: 'static + Sync + Send {
    type Transaction: Transaction;

    /// Inserts when the entity has no identifier, assigning one. Otherwise updates the
    /// stored record if its version still matches, failing with `Concurrency` when it
    /// does not. Returns the entity as stored.
    async fn save(
        &self,
        con: &mut Self::Transaction,
        entity: &E,
    ) -> error_stack::Result<E, KernelError>;

    /// Deleting an absent identifier is not an error.
    async fn delete_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &E::Id,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnEntityModifier<E: CatalogEntity>:
    'static + Sync + Send + DependOnDatabaseConnection
{
    type EntityModifier: EntityModifier<
        E,
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn entity_modifier(&self) -> &Self::EntityModifier;
}
