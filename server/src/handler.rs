use std::sync::Arc;

use driver::database::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresDatabase,
    PostgresPublisherRepository,
};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::DependOnEntityQuery;
use kernel::interface::update::DependOnEntityModifier;
use kernel::prelude::config::{DefaultPageSize, DependOnDefaultPageSize};
use kernel::prelude::entity::{Author, Book, Publisher};
use kernel::KernelError;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(config).await?)))
    }

    pub fn handler(&self) -> &Handler {
        &self.0
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    default_page_size: DefaultPageSize,
}

impl Handler {
    pub async fn init(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self {
            pgpool,
            default_page_size: config.default_page_size,
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.pgpool
    }
}

impl DependOnDefaultPageSize for Handler {
    fn default_page_size(&self) -> &DefaultPageSize {
        &self.default_page_size
    }
}

impl DependOnEntityQuery<Author> for Handler {
    type EntityQuery = PostgresAuthorRepository;
    fn entity_query(&self) -> &Self::EntityQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnEntityModifier<Author> for Handler {
    type EntityModifier = PostgresAuthorRepository;
    fn entity_modifier(&self) -> &Self::EntityModifier {
        &PostgresAuthorRepository
    }
}

impl DependOnEntityQuery<Book> for Handler {
    type EntityQuery = PostgresBookRepository;
    fn entity_query(&self) -> &Self::EntityQuery {
        &PostgresBookRepository
    }
}

impl DependOnEntityModifier<Book> for Handler {
    type EntityModifier = PostgresBookRepository;
    fn entity_modifier(&self) -> &Self::EntityModifier {
        &PostgresBookRepository
    }
}

impl DependOnEntityQuery<Publisher> for Handler {
    type EntityQuery = PostgresPublisherRepository;
    fn entity_query(&self) -> &Self::EntityQuery {
        &PostgresPublisherRepository
    }
}

impl DependOnEntityModifier<Publisher> for Handler {
    type EntityModifier = PostgresPublisherRepository;
    fn entity_modifier(&self) -> &Self::EntityModifier {
        &PostgresPublisherRepository
    }
}
