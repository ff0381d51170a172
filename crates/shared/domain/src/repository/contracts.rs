//! Repository contracts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entity::DomainEntity;
use crate::error::DomainResult;
use crate::search::{SearchParams, SearchResult};

/// Persistence capability for one entity type.
///
/// Every miss on an id reports `DomainError::NotFound("Entity not found")`.
#[async_trait]
pub trait Repository<E: DomainEntity>: Send + Sync {
    /// Store a new entity
    async fn insert(&self, entity: E) -> DomainResult<()>;

    /// Find entity by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<E>;

    /// Snapshot of every stored entity, in insertion order
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Replace the stored entity sharing `entity`'s id
    async fn update(&self, entity: E) -> DomainResult<()>;

    /// Remove entity by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}

/// Repository with a filter, sort and paginate query.
#[async_trait]
pub trait SearchableRepository<E: DomainEntity>: Repository<E> {
    /// Field names accepted as `sort`
    fn sortable_fields(&self) -> &[&'static str];

    async fn search(&self, params: &SearchParams) -> DomainResult<SearchResult<E>>;
}
