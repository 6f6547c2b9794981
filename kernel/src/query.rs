use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CatalogEntity, Pagination};
use crate::KernelError;

#[async_trait::async_trait]
pub trait EntityQuery<E: CatalogEntity>: 'static + Sync + Send {
    type Transaction: Transaction;

    /// Store order is preserved; `None` reads the whole collection.
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<E>, KernelError>;

    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &E::Id,
    ) -> error_stack::Result<Option<E>, KernelError>;

    async fn find_by_natural_key(
        &self,
        con: &mut Self::Transaction,
        key: &E::NaturalKey,
    ) -> error_stack::Result<Option<E>, KernelError>;

    async fn exists_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &E::Id,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnEntityQuery<E: CatalogEntity>:
    'static + Sync + Send + DependOnDatabaseConnection
{
    type EntityQuery: EntityQuery<
        E,
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn entity_query(&self) -> &Self::EntityQuery;
}
