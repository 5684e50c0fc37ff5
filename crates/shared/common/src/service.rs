//! Generic business-service traits.
//!
//! `CrudService` provides every common operation as a default method over
//! the repository its implementor supplies; concrete services override only
//! what differs (custom filtering, eager loading). `PublicCrudService`
//! layers the public-UUID operations on top and can only be implemented
//! when a `PublicRepository` is available, so a misconfigured service is a
//! compile error rather than a runtime failure.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::mapper::Patch;
use crate::pagination::{Page, PageRequest};
use crate::repository::{PublicRepository, Repository};

/// Common business operations, implemented once and reused by every
/// concrete resource service.
#[async_trait]
pub trait CrudService: Send + Sync {
    type Entity: Send + Sync + 'static;
    type Id: Send + Sync + Clone + 'static;
    type Filter: Send + Sync + 'static;

    fn repository(&self) -> &dyn Repository<Self::Entity, Self::Id>;

    /// Persist and return the stored entity.
    async fn save(&self, entity: Self::Entity) -> AppResult<Self::Entity> {
        self.repository().insert(entity).await
    }

    /// Batch persist.
    async fn save_all(&self, entities: Vec<Self::Entity>) -> AppResult<Vec<Self::Entity>> {
        self.repository().insert_all(entities).await
    }

    async fn find_by_id(&self, id: Self::Id) -> AppResult<Option<Self::Entity>> {
        self.repository().find_by_id(id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Self::Entity>> {
        self.repository().find_all().await
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<Page<Self::Entity>> {
        let (items, total) = self.repository().find_page(page).await?;
        Ok(Page::new(items, page, total))
    }

    /// Default behavior ignores the filter and delegates to `find_page`;
    /// concrete services override to apply real predicates.
    async fn find_page_with_filter(
        &self,
        _filter: &Self::Filter,
        page: &PageRequest,
    ) -> AppResult<Page<Self::Entity>> {
        self.find_page(page).await
    }

    /// Unpaged variant of the filtered lookup; same default.
    async fn find_all_with_filter(&self, _filter: &Self::Filter) -> AppResult<Vec<Self::Entity>> {
        self.find_all().await
    }

    /// Load by internal id, apply the patch, persist.
    ///
    /// Fails with `NotFound` before any write when the id does not resolve.
    async fn update(
        &self,
        id: Self::Id,
        patch: &dyn Patch<Self::Entity>,
    ) -> AppResult<Self::Entity> {
        let mut entity = self
            .repository()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;
        patch.apply(&mut entity);
        self.repository().update(entity).await
    }

    /// Fails with `NotFound` when the target does not exist.
    async fn delete_by_id(&self, id: Self::Id) -> AppResult<()> {
        if !self.repository().exists_by_id(id.clone()).await? {
            return Err(AppError::NotFound);
        }
        self.repository().delete_by_id(id).await
    }

    /// Deletes exactly the ids that exist and returns that count; ids that
    /// don't resolve are ignored, not errors.
    async fn delete_all_by_ids(&self, ids: &[Self::Id]) -> AppResult<u64> {
        self.repository().delete_by_ids(ids).await
    }

    async fn exists_by_id(&self, id: Self::Id) -> AppResult<bool> {
        self.repository().exists_by_id(id).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.repository().count().await
    }

    /// Default behavior ignores the filter and counts everything.
    async fn count_with_filter(&self, _filter: &Self::Filter) -> AppResult<u64> {
        self.count().await
    }

    /// Load-then-map convenience; empty when the id does not resolve.
    async fn find_and_transform<T, F>(&self, id: Self::Id, transform: F) -> AppResult<Option<T>>
    where
        T: Send + 'static,
        F: FnOnce(Self::Entity) -> T + Send + 'static,
    {
        Ok(self.repository().find_by_id(id).await?.map(transform))
    }
}

/// Operations for entities addressed by a stable public UUID.
#[async_trait]
pub trait PublicCrudService: CrudService {
    fn public_repository(&self) -> &dyn PublicRepository<Self::Entity, Self::Id>;

    async fn find_by_public_id(&self, public_id: Uuid) -> AppResult<Option<Self::Entity>> {
        self.public_repository().find_by_public_id(public_id).await
    }

    /// Load by public id, apply the patch, persist.
    async fn update_by_public_id(
        &self,
        public_id: Uuid,
        patch: &dyn Patch<Self::Entity>,
    ) -> AppResult<Self::Entity> {
        let mut entity = self
            .public_repository()
            .find_by_public_id(public_id)
            .await?
            .ok_or(AppError::NotFound)?;
        patch.apply(&mut entity);
        self.public_repository().update(entity).await
    }

    async fn delete_by_public_id(&self, public_id: Uuid) -> AppResult<()> {
        if !self
            .public_repository()
            .exists_by_public_id(public_id)
            .await?
        {
            return Err(AppError::NotFound);
        }
        self.public_repository().delete_by_public_id(public_id).await
    }

    /// Batch delete with partial-success semantics, mirroring
    /// `delete_all_by_ids`. An empty id list is rejected.
    async fn delete_all_by_public_ids(&self, public_ids: &[Uuid]) -> AppResult<u64> {
        if public_ids.is_empty() {
            return Err(AppError::validation(
                "At least one public id is required for batch deletion",
            ));
        }
        self.public_repository().delete_by_public_ids(public_ids).await
    }

    async fn exists_by_public_id(&self, public_id: Uuid) -> AppResult<bool> {
        self.public_repository().exists_by_public_id(public_id).await
    }

    /// Load-then-map convenience keyed by public id.
    async fn find_and_transform_by_public_id<T, F>(
        &self,
        public_id: Uuid,
        transform: F,
    ) -> AppResult<Option<T>>
    where
        T: Send + 'static,
        F: FnOnce(Self::Entity) -> T + Send + 'static,
    {
        Ok(self
            .public_repository()
            .find_by_public_id(public_id)
            .await?
            .map(transform))
    }
}
