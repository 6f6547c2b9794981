use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::EntityQuery;
use kernel::interface::update::EntityModifier;
use kernel::prelude::entity::{
    Book, BookId, BookIsbn, BookTitle, CatalogEntity, EntityVersion, Pagination,
};
use kernel::KernelError;

use crate::database::postgres::{stale_version, ConvertWriteError, PostgresConnection};
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl EntityQuery<Book> for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, page).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_by_natural_key(
        &self,
        con: &mut PostgresConnection,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_isbn(con, isbn).await
    }

    async fn exists_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        PgBookInternal::exists_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl EntityModifier<Book> for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn save(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        match book.id() {
            None => PgBookInternal::create(con, book).await,
            Some(id) => PgBookInternal::update(con, id, book).await,
        }
    }

    async fn delete_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    isbn: String,
    title: String,
    version: i64,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            Some(BookId::new(value.id)),
            BookIsbn::new(value.isbn),
            BookTitle::new(value.title),
            EntityVersion::new(value.version),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    #[tracing::instrument(skip(con))]
    async fn find_all(
        con: &mut PgConnection,
        page: Option<&Pagination>,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = match page {
            None => {
                // language=postgresql
                sqlx::query_as::<_, BookRow>(
                    r#"
                    SELECT id, isbn, title, version
                    FROM books
                    ORDER BY id
                    "#,
                )
            }
            Some(page) => {
                // language=postgresql
                sqlx::query_as::<_, BookRow>(
                    r#"
                    SELECT id, isbn, title, version
                    FROM books
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
        Ok(rows.into_iter().map(Book::from).collect())
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, isbn, title, version
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    #[tracing::instrument(skip(con))]
    async fn find_by_isbn(
        con: &mut PgConnection,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, isbn, title, version
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    #[tracing::instrument(skip(con))]
    async fn exists_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)
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
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        let id = BookId::new(Uuid::new_v4());
        let version = book.version().next();
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO books (id, isbn, title, version)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_ref())
        .bind(book.isbn().as_ref())
        .bind(book.title().as_ref())
        .bind(version.as_ref())
        .execute(con)
        .await
        .convert_write_error(Book::KIND)?;
        Ok(book.clone().with_identity(id, version))
    }

    #[tracing::instrument(skip(con))]
    async fn update(
        con: &mut PgConnection,
        id: &BookId,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        let version = book.version().next();
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE books
            SET isbn = $2, title = $3, version = $4
            WHERE id = $1 AND version = $5
            "#,
        )
        .bind(id.as_ref())
        .bind(book.isbn().as_ref())
        .bind(book.title().as_ref())
        .bind(version.as_ref())
        .bind(book.version().as_ref())
        .execute(con)
        .await
        .convert_write_error(Book::KIND)?;
        if result.rows_affected() == 0 {
            return Err(stale_version(Book::KIND));
        }
        Ok(book.clone().with_identity(id.clone(), version))
    }

    #[tracing::instrument(skip(con))]
    async fn delete(con: &mut PgConnection, id: &BookId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM books
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
