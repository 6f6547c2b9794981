use std::ops::{Deref, DerefMut};

use error_stack::Report;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::EntityKind;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{author::*, book::*, publisher::*};

mod author;
mod book;
mod publisher;

static POSTGRES_URL: &str = "POSTGRES_URL";

const SERIALIZATION_FAILURE: &str = "40001";

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresConnection;

    async fn transact(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let mut con = self.pool.begin().await.convert_error()?;
        // Uniqueness checks read before they write.
        // language=postgresql
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *con)
            .await
            .convert_error()?;
        Ok(PostgresConnection(con))
    }
}

pub struct PostgresConnection(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

fn classify(error: &Error) -> KernelError {
    match error {
        Error::PoolTimedOut => KernelError::Timeout,
        Error::Database(e) if e.code().as_deref() == Some(SERIALIZATION_FAILURE) => {
            KernelError::Concurrency
        }
        _ => KernelError::Internal,
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = classify(&error);
            Report::from(error).change_context(context)
        })
    }
}

pub(in crate::database) trait ConvertWriteError {
    type Ok;
    /// Reports a unique constraint violation as a conflict on `kind`.
    fn convert_write_error(self, kind: EntityKind) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertWriteError for Result<T, Error> {
    type Ok = T;
    fn convert_write_error(self, kind: EntityKind) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::Database(e) if e.is_unique_violation() => {
                    KernelError::AlreadyExists { kind }
                }
                other => classify(other),
            };
            Report::from(error).change_context(context)
        })
    }
}

pub(in crate::database) fn stale_version(kind: EntityKind) -> Report<KernelError> {
    Report::new(KernelError::Concurrency)
        .attach_printable(format!("{kind} was modified or removed by another transaction"))
}
