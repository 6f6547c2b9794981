use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::EntityQuery;
use kernel::interface::update::EntityModifier;
use kernel::prelude::entity::{
    CatalogEntity, EntityVersion, Pagination, Publisher, PublisherAddress, PublisherCity,
    PublisherId, PublisherName, PublisherState, PublisherZipCode,
};
use kernel::KernelError;

use crate::database::postgres::{stale_version, ConvertWriteError, PostgresConnection};
use crate::error::ConvertError;

pub struct PostgresPublisherRepository;

#[async_trait::async_trait]
impl EntityQuery<Publisher> for PostgresPublisherRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<Publisher>, KernelError> {
        PgPublisherInternal::find_all(con, page).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &PublisherId,
    ) -> error_stack::Result<Option<Publisher>, KernelError> {
        PgPublisherInternal::find_by_id(con, id).await
    }

    async fn find_by_natural_key(
        &self,
        con: &mut PostgresConnection,
        name: &PublisherName,
    ) -> error_stack::Result<Option<Publisher>, KernelError> {
        PgPublisherInternal::find_by_name(con, name).await
    }

    async fn exists_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &PublisherId,
    ) -> error_stack::Result<bool, KernelError> {
        PgPublisherInternal::exists_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl EntityModifier<Publisher> for PostgresPublisherRepository {
    type Transaction = PostgresConnection;

    async fn save(
        &self,
        con: &mut PostgresConnection,
        publisher: &Publisher,
    ) -> error_stack::Result<Publisher, KernelError> {
        match publisher.id() {
            None => PgPublisherInternal::create(con, publisher).await,
            Some(id) => PgPublisherInternal::update(con, id, publisher).await,
        }
    }

    async fn delete_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &PublisherId,
    ) -> error_stack::Result<(), KernelError> {
        PgPublisherInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct PublisherRow {
    id: Uuid,
    name: String,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    version: i64,
}

impl From<PublisherRow> for Publisher {
    fn from(value: PublisherRow) -> Self {
        Publisher::new(
            Some(PublisherId::new(value.id)),
            PublisherName::new(value.name),
            value.address.map(PublisherAddress::new),
            value.city.map(PublisherCity::new),
            value.state.map(PublisherState::new),
            value.zip_code.map(PublisherZipCode::new),
            EntityVersion::new(value.version),
        )
    }
}

pub(in crate::database) struct PgPublisherInternal;

impl PgPublisherInternal {
    #[tracing::instrument(skip(con))]
    async fn find_all(
        con: &mut PgConnection,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<Publisher>, KernelError> {
        let rows = match page {
            None => {
                // language=postgresql
                sqlx::query_as::<_, PublisherRow>(
                    r#"
                    SELECT id, name, address, city, state, zip_code, version
                    FROM publishers
                    ORDER BY id
                    "#,
                )
            }
            Some(page) => {
                // language=postgresql
                sqlx::query_as::<_, PublisherRow>(
                    r#"
                    SELECT id, name, address, city, state, zip_code, version
                    FROM publishers
                    ORDER BY id
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(page.limit())
                .bind(page.offset()?)
            }
        }
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Publisher::from).collect())
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_id(
        con: &mut PgConnection,
        id: &PublisherId,
    ) -> error_stack::Result<Option<Publisher>, KernelError> {
        let row = sqlx::query_as::<_, PublisherRow>(
            // language=postgresql
            r#"
            SELECT id, name, address, city, state, zip_code, version
            FROM publishers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Publisher::from))
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_name(
        con: &mut PgConnection,
        name: &PublisherName,
    ) -> error_stack::Result<Option<Publisher>, KernelError> {
        let row = sqlx::query_as::<_, PublisherRow>(
            // language=postgresql
            r#"
            SELECT id, name, address, city, state, zip_code, version
            FROM publishers
            WHERE name = $1
            "#,
        )
        .bind(name.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Publisher::from))
    }

    #[tracing::instrument(skip(con))]
    async fn exists_by_id(
        con: &mut PgConnection,
        id: &PublisherId,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM publishers WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()
    }

    #[tracing::instrument(skip(con))]
    async fn create(
        con: &mut PgConnection,
        publisher: &Publisher,
    ) -> error_stack::Result<Publisher, KernelError> {
        let id = PublisherId::new(Uuid::new_v4());
        let version = publisher.version().next();
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO publishers (id, name, address, city, state, zip_code, version)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.as_ref())
        .bind(publisher.name().as_ref())
        .bind(publisher.address().as_ref().map(AsRef::<String>::as_ref))
        .bind(publisher.city().as_ref().map(AsRef::<String>::as_ref))
        .bind(publisher.state().as_ref().map(AsRef::<String>::as_ref))
        .bind(publisher.zip_code().as_ref().map(AsRef::<String>::as_ref))
        .bind(version.as_ref())
        .execute(con)
        .await
        .convert_write_error(Publisher::KIND)?;
        Ok(publisher.clone().with_identity(id, version))
    }

    #[tracing::instrument(skip(con))]
    async fn update(
        con: &mut PgConnection,
        id: &PublisherId,
        publisher: &Publisher,
    ) -> error_stack::Result<Publisher, KernelError> {
        let version = publisher.version().next();
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE publishers
            SET name = $2, address = $3, city = $4, state = $5, zip_code = $6, version = $7
            WHERE id = $1 AND version = $8
            "#,
        )
        .bind(id.as_ref())
        .bind(publisher.name().as_ref())
        .bind(publisher.address().as_ref().map(AsRef::<String>::as_ref))
        .bind(publisher.city().as_ref().map(AsRef::<String>::as_ref))
        .bind(publisher.state().as_ref().map(AsRef::<String>::as_ref))
        .bind(publisher.zip_code().as_ref().map(AsRef::<String>::as_ref))
        .bind(version.as_ref())
        .bind(publisher.version().as_ref())
        .execute(con)
        .await
        .convert_write_error(Publisher::KIND)?;
        if result.rows_affected() == 0 {
            return Err(stale_version(Publisher::KIND));
        }
        Ok(publisher.clone().with_identity(id.clone(), version))
    }

    #[tracing::instrument(skip(con))]
    async fn delete(
        con: &mut PgConnection,
        id: &PublisherId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM publishers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
