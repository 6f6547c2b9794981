use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnEntityQuery, EntityQuery};
use kernel::interface::update::{DependOnEntityModifier, EntityModifier};
use kernel::prelude::config::DependOnDefaultPageSize;
use kernel::prelude::entity::{CatalogEntity, Identifier, PageNumber, PageSize, Pagination};
use kernel::KernelError;

use crate::transfer::{to_dto, CatalogDto};

fn identifier<E: CatalogEntity>(id: Uuid) -> E::Id {
    E::Id::from_uuid(id)
}

fn not_found<E: CatalogEntity>(id: Uuid) -> Report<KernelError> {
    Report::new(KernelError::NotFound { kind: E::KIND, id })
}

fn already_exists<E: CatalogEntity>() -> Report<KernelError> {
    Report::new(KernelError::AlreadyExists { kind: E::KIND })
}

/// Create/read/update/delete for one catalog kind, selected by its DTO.
///
/// Every call runs in a single transaction. Writes commit only after all checks pass,
/// so a failed uniqueness check leaves the store untouched.
#[async_trait::async_trait]
pub trait CatalogService<D: CatalogDto>:
    'static
    + Sync
    + Send
    + DependOnEntityQuery<D::Entity>
    + DependOnEntityModifier<D::Entity>
    + DependOnDefaultPageSize
{
    async fn find_all(&self) -> error_stack::Result<Vec<D>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let entities = self.entity_query().find_all(&mut connection, None).await?;
        Ok(entities.into_iter().map(D::from).collect())
    }

    async fn find_page(
        &self,
        page_number: Option<PageNumber>,
        page_size: Option<PageSize>,
    ) -> error_stack::Result<Vec<D>, KernelError> {
        let page = Pagination::resolve(
            page_number,
            page_size,
            self.default_page_size().page_size(),
        );
        page.offset()?;
        let mut connection = self.database_connection().transact().await?;
        let entities = self
            .entity_query()
            .find_all(&mut connection, Some(&page))
            .await?;
        Ok(entities.into_iter().map(D::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> error_stack::Result<D, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let found = self
            .entity_query()
            .find_by_id(&mut connection, &identifier::<D::Entity>(id))
            .await?;
        to_dto::<D>(found).ok_or_else(|| not_found::<D::Entity>(id))
    }

    async fn exists_by_id(&self, id: Uuid) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.entity_query()
            .exists_by_id(&mut connection, &identifier::<D::Entity>(id))
            .await
    }

    async fn create(&self, dto: D) -> error_stack::Result<D, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let candidate = D::Entity::from(dto.without_id());
        let holder = self
            .entity_query()
            .find_by_natural_key(&mut connection, &candidate.natural_key())
            .await?;
        if holder.is_some() {
            return Err(already_exists::<D::Entity>());
        }

        let saved = self
            .entity_modifier()
            .save(&mut connection, &candidate)
            .await?;
        connection.commit().await?;

        Ok(D::from(saved))
    }

    /// Replaces every domain field of the stored record with the ones in `dto`.
    /// Fields missing from `dto` are cleared. The id in `dto` is ignored.
    async fn update(&self, id: Uuid, dto: D) -> error_stack::Result<D, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let entity_id = identifier::<D::Entity>(id);
        let mut stored = self
            .entity_query()
            .find_by_id(&mut connection, &entity_id)
            .await?
            .ok_or_else(|| not_found::<D::Entity>(id))?;

        let incoming = D::Entity::from(dto);
        let holder = self
            .entity_query()
            .find_by_natural_key(&mut connection, &incoming.natural_key())
            .await?;
        if holder.is_some_and(|holder| holder.identifier() != Some(&entity_id)) {
            return Err(already_exists::<D::Entity>());
        }

        stored.replace_fields(incoming);
        let saved = self.entity_modifier().save(&mut connection, &stored).await?;
        connection.commit().await?;

        Ok(D::from(saved))
    }

    /// Succeeds whether or not the record exists.
    async fn delete_by_id(&self, id: Uuid) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.entity_modifier()
            .delete_by_id(&mut connection, &identifier::<D::Entity>(id))
            .await?;
        connection.commit().await?;
        Ok(())
    }
}

impl<D: CatalogDto, T> CatalogService<D> for T where
    T: DependOnEntityQuery<D::Entity> + DependOnEntityModifier<D::Entity> + DependOnDefaultPageSize
{
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use error_stack::Report;
    use uuid::Uuid;

    use kernel::interface::database::{
        DatabaseConnection, DependOnDatabaseConnection, Transaction,
    };
    use kernel::interface::query::{DependOnEntityQuery, EntityQuery};
    use kernel::interface::update::{DependOnEntityModifier, EntityModifier};
    use kernel::prelude::config::{DefaultPageSize, DependOnDefaultPageSize};
    use kernel::prelude::entity::{
        Author, Book, CatalogEntity, EntityKind, Identifier, PageNumber, PageSize, Pagination,
        Publisher,
    };
    use kernel::KernelError;

    use crate::service::CatalogService;
    use crate::transfer::{AuthorDto, BookDto, PublisherDto};

    struct MemoryTransaction;

    #[async_trait::async_trait]
    impl Transaction for MemoryTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    struct MemoryDatabase;

    #[async_trait::async_trait]
    impl DatabaseConnection for MemoryDatabase {
        type Transaction = MemoryTransaction;
        async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
            Ok(MemoryTransaction)
        }
    }

    struct MemoryStore<E> {
        rows: Mutex<Vec<E>>,
        pages: Mutex<Vec<Option<Pagination>>>,
    }

    impl<E> Default for MemoryStore<E> {
        fn default() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                pages: Mutex::new(Vec::new()),
            }
        }
    }

    impl<E: CatalogEntity> MemoryStore<E> {
        fn rows(&self) -> Vec<E> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl<E: CatalogEntity> EntityQuery<E> for MemoryStore<E> {
        type Transaction = MemoryTransaction;

        async fn find_all(
            &self,
            _: &mut MemoryTransaction,
            page: Option<&Pagination>,
        ) -> error_stack::Result<Vec<E>, KernelError> {
            self.pages.lock().unwrap().push(page.copied());
            let rows = self.rows();
            Ok(match page {
                None => rows,
                Some(page) => rows
                    .into_iter()
                    .skip(page.offset()? as usize)
                    .take(page.limit() as usize)
                    .collect(),
            })
        }

        async fn find_by_id(
            &self,
            _: &mut MemoryTransaction,
            id: &E::Id,
        ) -> error_stack::Result<Option<E>, KernelError> {
            Ok(self
                .rows()
                .into_iter()
                .find(|row| row.identifier() == Some(id)))
        }

        async fn find_by_natural_key(
            &self,
            _: &mut MemoryTransaction,
            key: &E::NaturalKey,
        ) -> error_stack::Result<Option<E>, KernelError> {
            Ok(self
                .rows()
                .into_iter()
                .find(|row| &row.natural_key() == key))
        }

        async fn exists_by_id(
            &self,
            con: &mut MemoryTransaction,
            id: &E::Id,
        ) -> error_stack::Result<bool, KernelError> {
            Ok(self.find_by_id(con, id).await?.is_some())
        }
    }

    #[async_trait::async_trait]
    impl<E: CatalogEntity> EntityModifier<E> for MemoryStore<E> {
        type Transaction = MemoryTransaction;

        async fn save(
            &self,
            _: &mut MemoryTransaction,
            entity: &E,
        ) -> error_stack::Result<E, KernelError> {
            let mut rows = self.rows.lock().unwrap();
            let next = entity.entity_version().next();
            match entity.identifier() {
                None => {
                    let id = E::Id::from_uuid(Uuid::new_v4());
                    let saved = entity.clone().with_identity(id, next);
                    rows.push(saved.clone());
                    Ok(saved)
                }
                Some(id) => {
                    let row = rows
                        .iter_mut()
                        .find(|row| row.identifier() == Some(id))
                        .filter(|row| row.entity_version() == entity.entity_version())
                        .ok_or_else(|| Report::new(KernelError::Concurrency))?;
                    *row = entity.clone().with_identity(id.clone(), next);
                    Ok(row.clone())
                }
            }
        }

        async fn delete_by_id(
            &self,
            _: &mut MemoryTransaction,
            id: &E::Id,
        ) -> error_stack::Result<(), KernelError> {
            self.rows
                .lock()
                .unwrap()
                .retain(|row| row.identifier() != Some(id));
            Ok(())
        }
    }

    struct Catalog {
        database: MemoryDatabase,
        authors: MemoryStore<Author>,
        books: MemoryStore<Book>,
        publishers: MemoryStore<Publisher>,
        page_size: DefaultPageSize,
    }

    impl Catalog {
        fn new(default_page_size: i64) -> error_stack::Result<Self, KernelError> {
            Ok(Self {
                database: MemoryDatabase,
                authors: MemoryStore::default(),
                books: MemoryStore::default(),
                publishers: MemoryStore::default(),
                page_size: DefaultPageSize::new(default_page_size)?,
            })
        }
    }

    impl DependOnDatabaseConnection for Catalog {
        type DatabaseConnection = MemoryDatabase;
        fn database_connection(&self) -> &MemoryDatabase {
            &self.database
        }
    }

    impl DependOnDefaultPageSize for Catalog {
        fn default_page_size(&self) -> &DefaultPageSize {
            &self.page_size
        }
    }

    macro_rules! memory_store {
        ($entity:ty, $field:ident) => {
            impl DependOnEntityQuery<$entity> for Catalog {
                type EntityQuery = MemoryStore<$entity>;
                fn entity_query(&self) -> &Self::EntityQuery {
                    &self.$field
                }
            }

            impl DependOnEntityModifier<$entity> for Catalog {
                type EntityModifier = MemoryStore<$entity>;
                fn entity_modifier(&self) -> &Self::EntityModifier {
                    &self.$field
                }
            }
        };
    }

    memory_store!(Author, authors);
    memory_store!(Book, books);
    memory_store!(Publisher, publishers);

    fn catalog() -> Catalog {
        Catalog::new(20).unwrap()
    }

    fn author(first_name: &str, last_name: &str) -> AuthorDto {
        AuthorDto {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    fn book(isbn: &str, title: &str) -> BookDto {
        BookDto {
            id: None,
            isbn: isbn.to_string(),
            title: title.to_string(),
        }
    }

    fn publisher(name: &str) -> PublisherDto {
        PublisherDto {
            id: None,
            name: name.to_string(),
            address: Some("175 Fifth Avenue".to_string()),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            zip_code: Some("10010".to_string()),
        }
    }

    fn assert_already_exists(report: Report<KernelError>, kind: EntityKind) {
        assert_eq!(
            report.current_context(),
            &KernelError::AlreadyExists { kind }
        );
    }

    #[tokio::test]
    async fn create_assigns_id_and_rejects_duplicate_key() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();

        let created =
            CatalogService::<AuthorDto>::create(&catalog, author("Brandon", "Sanderson")).await?;
        assert!(created.id.is_some());
        assert_eq!(created.first_name, "Brandon");

        let duplicate =
            CatalogService::<AuthorDto>::create(&catalog, author("Brandon", "Sanderson")).await;
        assert_already_exists(duplicate.unwrap_err(), EntityKind::Author);
        assert_eq!(catalog.authors.rows().len(), 1);

        CatalogService::<AuthorDto>::create(&catalog, author("Brandon", "Mull")).await?;
        assert_eq!(catalog.authors.rows().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn natural_key_match_is_case_sensitive() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        CatalogService::<BookDto>::create(&catalog, book("978-0-00-000000-x", "Lower")).await?;
        CatalogService::<BookDto>::create(&catalog, book("978-0-00-000000-X", "Upper")).await?;
        assert_eq!(catalog.books.rows().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn create_ignores_supplied_id() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        let supplied = Uuid::new_v4();
        let dto = BookDto {
            id: Some(supplied),
            ..book("9780765326355", "The Way of Kings")
        };

        let created = CatalogService::<BookDto>::create(&catalog, dto).await?;
        assert!(created.id.is_some());
        assert_ne!(created.id, Some(supplied));
        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_record() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        let created = CatalogService::<PublisherDto>::create(&catalog, publisher("Tor")).await?;

        let found =
            CatalogService::<PublisherDto>::find_by_id(&catalog, created.id.unwrap()).await?;
        assert_eq!(found, created);

        let missing = Uuid::new_v4();
        let report = CatalogService::<PublisherDto>::find_by_id(&catalog, missing)
            .await
            .unwrap_err();
        assert_eq!(
            report.current_context(),
            &KernelError::NotFound {
                kind: EntityKind::Publisher,
                id: missing
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn exists_by_id_follows_store() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        let created = CatalogService::<BookDto>::create(&catalog, book("1", "One")).await?;
        let id = created.id.unwrap();

        assert!(CatalogService::<BookDto>::exists_by_id(&catalog, id).await?);
        CatalogService::<BookDto>::delete_by_id(&catalog, id).await?;
        assert!(!CatalogService::<BookDto>::exists_by_id(&catalog, id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_every_field_and_keeps_id() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        let created = CatalogService::<PublisherDto>::create(&catalog, publisher("Tor")).await?;
        let id = created.id.unwrap();

        let incoming = PublisherDto {
            id: Some(Uuid::new_v4()),
            name: "Tor Books".to_string(),
            address: None,
            city: Some("Manhattan".to_string()),
            state: None,
            zip_code: None,
        };
        let updated = CatalogService::<PublisherDto>::update(&catalog, id, incoming).await?;

        let expected = PublisherDto {
            id: Some(id),
            name: "Tor Books".to_string(),
            address: None,
            city: Some("Manhattan".to_string()),
            state: None,
            zip_code: None,
        };
        assert_eq!(updated, expected);
        assert_eq!(
            CatalogService::<PublisherDto>::find_by_id(&catalog, id).await?,
            expected
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_to_own_key_is_allowed() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        let created =
            CatalogService::<BookDto>::create(&catalog, book("9780765326355", "Draft")).await?;
        let id = created.id.unwrap();

        let updated = CatalogService::<BookDto>::update(
            &catalog,
            id,
            book("9780765326355", "The Way of Kings"),
        )
        .await?;
        assert_eq!(updated.title, "The Way of Kings");
        Ok(())
    }

    #[tokio::test]
    async fn update_to_taken_key_leaves_record_unchanged() -> error_stack::Result<(), KernelError>
    {
        let catalog = catalog();
        let holder =
            CatalogService::<AuthorDto>::create(&catalog, author("Brandon", "Sanderson")).await?;
        let other =
            CatalogService::<AuthorDto>::create(&catalog, author("Robert", "Jordan")).await?;
        let other_id = other.id.unwrap();

        let report = CatalogService::<AuthorDto>::update(
            &catalog,
            other_id,
            author("Brandon", "Sanderson"),
        )
        .await
        .unwrap_err();
        assert_already_exists(report, EntityKind::Author);

        let refetched = CatalogService::<AuthorDto>::find_by_id(&catalog, other_id).await?;
        assert_eq!(refetched, other);
        assert_ne!(refetched, holder);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let catalog = catalog();
        let missing = Uuid::new_v4();
        let report =
            CatalogService::<AuthorDto>::update(&catalog, missing, author("Brandon", "Sanderson"))
                .await
                .unwrap_err();
        assert_eq!(
            report.current_context(),
            &KernelError::NotFound {
                kind: EntityKind::Author,
                id: missing
            }
        );
        assert!(catalog.authors.rows().is_empty());
    }

    #[tokio::test]
    async fn update_bumps_stored_version() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        let created = CatalogService::<BookDto>::create(&catalog, book("1", "One")).await?;
        let id = created.id.unwrap();

        CatalogService::<BookDto>::update(&catalog, id, book("1", "Uno")).await?;
        CatalogService::<BookDto>::update(&catalog, id, book("1", "Eins")).await?;

        let stored = catalog.books.rows().remove(0);
        assert_eq!(*stored.entity_version().as_ref(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        CatalogService::<AuthorDto>::delete_by_id(&catalog, Uuid::new_v4()).await?;

        let created =
            CatalogService::<AuthorDto>::create(&catalog, author("Brandon", "Sanderson")).await?;
        let id = created.id.unwrap();
        CatalogService::<AuthorDto>::delete_by_id(&catalog, id).await?;
        CatalogService::<AuthorDto>::delete_by_id(&catalog, id).await?;

        assert!(catalog.authors.rows().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_preserves_store_order() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        for isbn in ["3", "1", "2"] {
            CatalogService::<BookDto>::create(&catalog, book(isbn, "title")).await?;
        }

        let isbns = CatalogService::<BookDto>::find_all(&catalog)
            .await?
            .into_iter()
            .map(|book| book.isbn)
            .collect::<Vec<_>>();
        assert_eq!(isbns, vec!["3", "1", "2"]);
        assert_eq!(*catalog.books.pages.lock().unwrap(), vec![None]);
        Ok(())
    }

    #[tokio::test]
    async fn find_page_resolves_missing_values() -> error_stack::Result<(), KernelError> {
        let catalog = Catalog::new(2)?;
        for name in ["A", "B", "C", "D", "E"] {
            CatalogService::<PublisherDto>::create(&catalog, publisher(name)).await?;
        }
        let default_size = PageSize::new(2).unwrap();

        let first = CatalogService::<PublisherDto>::find_page(&catalog, None, None).await?;
        let third =
            CatalogService::<PublisherDto>::find_page(&catalog, Some(PageNumber::new(2)), None)
                .await?;
        let sized =
            CatalogService::<PublisherDto>::find_page(&catalog, None, PageSize::new(4)).await?;

        assert_eq!(
            *catalog.publishers.pages.lock().unwrap(),
            vec![
                Some(Pagination::new(PageNumber::new(0), default_size)),
                Some(Pagination::new(PageNumber::new(2), default_size)),
                Some(Pagination::new(PageNumber::new(0), PageSize::new(4).unwrap())),
            ]
        );
        assert_eq!(
            first.into_iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert_eq!(
            third.into_iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["E"]
        );
        assert_eq!(sized.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn unaddressable_page_is_rejected_before_store() {
        let catalog = catalog();
        let report = CatalogService::<BookDto>::find_page(
            &catalog,
            Some(PageNumber::new(u32::MAX)),
            PageSize::new(u32::MAX),
        )
        .await
        .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Validation);
        assert!(catalog.books.pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_with_stale_version_is_a_concurrency_error(
    ) -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        CatalogService::<AuthorDto>::create(&catalog, author("Brandon", "Sanderson")).await?;
        let stored = catalog.authors.rows().remove(0);

        let mut con = MemoryTransaction;
        let saved = catalog.authors.save(&mut con, &stored).await?;
        assert_eq!(*saved.entity_version().as_ref(), 1);

        let report = catalog.authors.save(&mut con, &stored).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Concurrency);
        assert_eq!(catalog.authors.rows(), vec![saved]);
        Ok(())
    }

    #[test]
    fn non_positive_default_page_size_prevents_construction() {
        for size in [0, -5] {
            let report = Catalog::new(size).err().unwrap();
            assert_eq!(report.current_context(), &KernelError::Configuration);
        }
    }

    #[tokio::test]
    async fn kinds_do_not_share_keys() -> error_stack::Result<(), KernelError> {
        let catalog = catalog();
        CatalogService::<PublisherDto>::create(&catalog, publisher("Orbit")).await?;
        CatalogService::<AuthorDto>::create(&catalog, author("Orbit", "Orbit")).await?;
        CatalogService::<BookDto>::create(&catalog, book("Orbit", "Orbit")).await?;
        assert_eq!(catalog.publishers.rows().len(), 1);
        assert_eq!(catalog.authors.rows().len(), 1);
        assert_eq!(catalog.books.rows().len(), 1);
        Ok(())
    }
}
