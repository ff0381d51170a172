//! In-memory repositories.
//!
//! The store owns its backing `Vec` behind a `tokio::sync::RwLock`. Each
//! operation holds the lock for its whole duration, so single-entity
//! operations are atomic and concurrent writers resolve as last writer wins.
//! Readers always receive owned clones.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::contracts::{Repository, SearchableRepository};
use super::pipeline::{run_search, SearchPolicy};
use crate::constants::ENTITY_NOT_FOUND;
use crate::entity::DomainEntity;
use crate::error::{DomainError, DomainResult};
use crate::search::{SearchParams, SearchResult};

/// Vec-backed repository for any entity type.
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

impl<E: DomainEntity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// First stored entity satisfying `predicate`.
    pub async fn find_by<F>(&self, predicate: F) -> Option<E>
    where
        F: Fn(&E) -> bool + Send,
    {
        self.items
            .read()
            .await
            .iter()
            .find(|item| predicate(item))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<E: DomainEntity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: DomainEntity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: E) -> DomainResult<()> {
        debug!(id = %entity.id(), "Inserting entity");
        self.items.write().await.push(entity);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<E> {
        self.find_by(|item| item.id() == id)
            .await
            .ok_or_else(|| DomainError::not_found(ENTITY_NOT_FOUND))
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        let id = entity.id();
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| DomainError::not_found(ENTITY_NOT_FOUND))?;
        *slot = entity;
        debug!(id = %id, "Updated entity");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::not_found(ENTITY_NOT_FOUND))?;
        items.remove(index);
        debug!(id = %id, "Deleted entity");
        Ok(())
    }
}

/// In-memory repository with search driven by a [`SearchPolicy`].
pub struct InMemorySearchableRepository<E, P> {
    store: InMemoryRepository<E>,
    policy: P,
}

impl<E, P> InMemorySearchableRepository<E, P>
where
    E: DomainEntity,
    P: SearchPolicy<E>,
{
    pub fn new(policy: P) -> Self {
        Self {
            store: InMemoryRepository::new(),
            policy,
        }
    }

    /// Underlying store, for lookups the contracts do not cover.
    pub fn store(&self) -> &InMemoryRepository<E> {
        &self.store
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<E, P> Default for InMemorySearchableRepository<E, P>
where
    E: DomainEntity,
    P: SearchPolicy<E> + Default,
{
    fn default() -> Self {
        Self::new(P::default())
    }
}

#[async_trait]
impl<E, P> Repository<E> for InMemorySearchableRepository<E, P>
where
    E: DomainEntity,
    P: SearchPolicy<E>,
{
    async fn insert(&self, entity: E) -> DomainResult<()> {
        self.store.insert(entity).await
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<E> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        self.store.find_all().await
    }

    async fn update(&self, entity: E) -> DomainResult<()> {
        self.store.update(entity).await
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl<E, P> SearchableRepository<E> for InMemorySearchableRepository<E, P>
where
    E: DomainEntity,
    P: SearchPolicy<E>,
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.policy.sortable_fields()
    }

    async fn search(&self, params: &SearchParams) -> DomainResult<SearchResult<E>> {
        let snapshot = self.store.find_all().await?;
        Ok(run_search(snapshot, params, &self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::repository::pipeline::{contains_ignore_case, SortValue};
    use crate::search::{SearchProps, SortDirection};
    use chrono::{DateTime, Duration, Utc};
    use tokio_test::{assert_err, assert_ok};

    #[derive(Debug, Clone, PartialEq)]
    struct StubProps {
        name: String,
        price: i64,
        created_at: DateTime<Utc>,
    }

    type StubEntity = Entity<StubProps>;

    fn stub_at(name: &str, price: i64, created_at: DateTime<Utc>) -> StubEntity {
        Entity::new(
            StubProps {
                name: name.to_string(),
                price,
                created_at,
            },
            None,
        )
    }

    fn stub(name: &str, price: i64) -> StubEntity {
        stub_at(name, price, Utc::now())
    }

    fn names(items: &[StubEntity]) -> Vec<&str> {
        items.iter().map(|item| item.props().name.as_str()).collect()
    }

    #[derive(Default)]
    struct StubPolicy;

    impl SearchPolicy<StubEntity> for StubPolicy {
        fn sortable_fields(&self) -> &[&'static str] {
            &["name"]
        }

        fn matches(&self, item: &StubEntity, filter: &str) -> bool {
            contains_ignore_case(&item.props().name, filter)
        }

        fn sort_value<'a>(&self, item: &'a StubEntity, field: &str) -> Option<SortValue<'a>> {
            match field {
                "name" => Some(SortValue::Text(&item.props().name)),
                "created_at" => Some(SortValue::Time(item.props().created_at)),
                _ => None,
            }
        }

        fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
            Some(("created_at", SortDirection::Desc))
        }
    }

    type StubRepository = InMemorySearchableRepository<StubEntity, StubPolicy>;

    #[tokio::test]
    async fn test_insert_and_find_all() {
        let repo = InMemoryRepository::new();
        let entity = stub("test", 10);

        assert_ok!(repo.insert(entity.clone()).await);

        assert_eq!(repo.find_all().await.unwrap(), vec![entity]);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryRepository::new();
        let entity = stub("test", 10);
        repo.insert(entity.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(entity.id()).await.unwrap(), entity);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let repo: InMemoryRepository<StubEntity> = InMemoryRepository::new();
        let missing = Uuid::new_v4();

        let expected = DomainError::not_found("Entity not found");
        assert_eq!(repo.find_by_id(missing).await.unwrap_err(), expected);
        assert_eq!(repo.update(stub("x", 1)).await.unwrap_err(), expected);
        assert_eq!(repo.delete(missing).await.unwrap_err(), expected);
    }

    #[tokio::test]
    async fn test_update_replaces_stored_entity() {
        let repo = InMemoryRepository::new();
        let entity = stub("test", 10);
        repo.insert(entity.clone()).await.unwrap();

        let updated = Entity::new(
            StubProps {
                name: "updated".to_string(),
                ..entity.props().clone()
            },
            Some(entity.id()),
        );
        assert_ok!(repo.update(updated.clone()).await);

        assert_eq!(repo.find_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_delete_removes_entity() {
        let repo = InMemoryRepository::new();
        let entity = stub("test", 10);
        repo.insert(entity.clone()).await.unwrap();

        assert_ok!(repo.delete(entity.id()).await);

        assert!(repo.is_empty().await);
        assert_err!(repo.find_by_id(entity.id()).await);
    }

    #[tokio::test]
    async fn test_find_all_returns_snapshot() {
        let repo = InMemoryRepository::new();
        repo.insert(stub("a", 1)).await.unwrap();

        let mut snapshot = repo.find_all().await.unwrap();
        snapshot.clear();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_search_defaults_over_sixteen_items() {
        let repo = StubRepository::default();
        let start = Utc::now();
        for i in 0..16 {
            repo.insert(stub_at(&format!("item-{i}"), i, start + Duration::seconds(i)))
                .await
                .unwrap();
        }

        let result = repo.search(&SearchParams::default()).await.unwrap();

        assert_eq!(result.total(), 16);
        assert_eq!(result.items().len(), 15);
        assert_eq!(result.current_page(), 1);
        assert_eq!(result.per_page(), 15);
        assert_eq!(result.last_page(), 2);
        // newest first
        assert_eq!(result.items()[0].props().name, "item-15");
        assert_eq!(result.items()[14].props().name, "item-1");
    }

    #[tokio::test]
    async fn test_search_filters_sorts_and_paginates() {
        let repo = StubRepository::default();
        for name in ["a", "AA", "Aa", "b", "c", "aaa"] {
            repo.insert(stub(name, 0)).await.unwrap();
        }

        let params = SearchParams::new(SearchProps {
            page: Some(2),
            per_page: Some(2),
            sort: Some("name".into()),
            sort_dir: Some("asc".into()),
            filter: Some("a".into()),
        });
        let result = repo.search(&params).await.unwrap();

        assert_eq!(result.total(), 4);
        assert_eq!(result.last_page(), 2);
        // asc byte order: AA, Aa, a, aaa
        assert_eq!(names(result.items()), vec!["a", "aaa"]);
    }

    #[tokio::test]
    async fn test_search_past_last_page_is_empty() {
        let repo = StubRepository::default();
        repo.insert(stub("a", 0)).await.unwrap();

        let params = SearchParams::new(SearchProps {
            page: Some(5),
            ..SearchProps::default()
        });
        let result = repo.search(&params).await.unwrap();

        assert!(result.items().is_empty());
        assert_eq!(result.total(), 1);
    }

    #[tokio::test]
    async fn test_sortable_fields_come_from_policy() {
        let repo = StubRepository::default();

        assert_eq!(repo.sortable_fields(), &["name"]);
    }
}
