use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::EntityQuery;
use kernel::interface::update::EntityModifier;
use kernel::prelude::entity::{
    Author, AuthorFirstName, AuthorId, AuthorLastName, CatalogEntity, EntityVersion, Pagination,
};
use kernel::KernelError;

use crate::database::postgres::{stale_version, ConvertWriteError, PostgresConnection};
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl EntityQuery<Author> for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con, page).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }

    async fn find_by_natural_key(
        &self,
        con: &mut PostgresConnection,
        key: &(AuthorFirstName, AuthorLastName),
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let (first_name, last_name) = key;
        PgAuthorInternal::find_by_name(con, first_name, last_name).await
    }

    async fn exists_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        PgAuthorInternal::exists_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl EntityModifier<Author> for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn save(
        &self,
        con: &mut PostgresConnection,
        author: &Author,
    ) -> error_stack::Result<Author, KernelError> {
        match author.id() {
            None => PgAuthorInternal::create(con, author).await,
            Some(id) => PgAuthorInternal::update(con, id, author).await,
        }
    }

    async fn delete_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    version: i64,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(
            Some(AuthorId::new(value.id)),
            AuthorFirstName::new(value.first_name),
            AuthorLastName::new(value.last_name),
            EntityVersion::new(value.version),
        )
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    #[tracing::instrument(skip(con))]
    async fn find_all(
        con: &mut PgConnection,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = match page {
            None => {
                // language=postgresql
                sqlx::query_as::<_, AuthorRow>(
                    r#"
                    SELECT id, first_name, last_name, version
                    FROM authors
                    ORDER BY id
                    "#,
                )
            }
            Some(page) => {
                // language=postgresql
                sqlx::query_as::<_, AuthorRow>(
                    r#"
                    SELECT id, first_name, last_name, version
                    FROM authors
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
        Ok(rows.into_iter().map(Author::from).collect())
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, version
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_name(
        con: &mut PgConnection,
        first_name: &AuthorFirstName,
        last_name: &AuthorLastName,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, version
            FROM authors
            WHERE first_name = $1 AND last_name = $2
            "#,
        )
        .bind(first_name.as_ref())
        .bind(last_name.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    #[tracing::instrument(skip(con))]
    async fn exists_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)
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
        author: &Author,
    ) -> error_stack::Result<Author, KernelError> {
        let id = AuthorId::new(Uuid::new_v4());
        let version = author.version().next();
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO authors (id, first_name, last_name, version)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(version.as_ref())
        .execute(con)
        .await
        .convert_write_error(Author::KIND)?;
        Ok(author.clone().with_identity(id, version))
    }

    #[tracing::instrument(skip(con))]
    async fn update(
        con: &mut PgConnection,
        id: &AuthorId,
        author: &Author,
    ) -> error_stack::Result<Author, KernelError> {
        let version = author.version().next();
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET first_name = $2, last_name = $3, version = $4
            WHERE id = $1 AND version = $5
            "#,
        )
        .bind(id.as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(version.as_ref())
        .bind(author.version().as_ref())
        .execute(con)
        .await
        .convert_write_error(Author::KIND)?;
        if result.rows_affected() == 0 {
            return Err(stale_version(Author::KIND));
        }
        Ok(author.clone().with_identity(id.clone(), version))
    }

    #[tracing::instrument(skip(con))]
    async fn delete(con: &mut PgConnection, id: &AuthorId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM authors
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
