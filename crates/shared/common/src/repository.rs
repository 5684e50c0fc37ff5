//! Generic repository traits.
//!
//! `Repository` is the data-access contract every store implements;
//! `PublicRepository` extends it for entities addressed by a stable public
//! UUID. Keeping the public-id operations in a separate trait makes the
//! capability a compile-time fact: a service can only offer public-id
//! lookups when its repository actually implements them.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::pagination::PageRequest;

/// CRUD data-access operations, parameterized by entity and identifier type.
#[async_trait]
pub trait Repository<E, Id>: Send + Sync
where
    E: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Persist a new entity, returning it with storage-assigned fields set.
    async fn insert(&self, entity: E) -> AppResult<E>;

    /// Batch persist.
    async fn insert_all(&self, entities: Vec<E>) -> AppResult<Vec<E>>;

    /// Find entity by internal identifier.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<E>>;

    /// Find all entities.
    async fn find_all(&self) -> AppResult<Vec<E>>;

    /// Find one page of entities plus the total element count.
    async fn find_page(&self, page: &PageRequest) -> AppResult<(Vec<E>, u64)>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: E) -> AppResult<E>;

    /// Delete by internal identifier.
    async fn delete_by_id(&self, id: Id) -> AppResult<()>;

    /// Delete the subset of `ids` that exists; returns the count removed.
    /// Missing ids are ignored silently (partial-success semantics).
    async fn delete_by_ids(&self, ids: &[Id]) -> AppResult<u64>;

    /// Check existence by internal identifier.
    async fn exists_by_id(&self, id: Id) -> AppResult<bool>;

    /// Count all entities.
    async fn count(&self) -> AppResult<u64>;
}

/// Data access for entities carrying a stable public UUID.
#[async_trait]
pub trait PublicRepository<E, Id>: Repository<E, Id>
where
    E: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find entity by its public identifier.
    async fn find_by_public_id(&self, public_id: Uuid) -> AppResult<Option<E>>;

    /// Find all entities among the given public identifiers.
    async fn find_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<Vec<E>>;

    /// Check existence by public identifier.
    async fn exists_by_public_id(&self, public_id: Uuid) -> AppResult<bool>;

    /// Delete by public identifier.
    async fn delete_by_public_id(&self, public_id: Uuid) -> AppResult<()>;

    /// Delete the subset of `public_ids` that exists; returns the count
    /// removed.
    async fn delete_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<u64>;
}
