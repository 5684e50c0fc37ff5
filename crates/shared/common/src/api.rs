//! Generic CRUD endpoint set.
//!
//! `CrudApi` wraps a service + mapper pair behind the uniform operation set
//! every resource exposes. Each operation catches raised errors, logs them
//! with resource context and returns a failure envelope carrying the error
//! code — callers never see a raw error body.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppError;
use crate::mapper::Mapper;
use crate::pagination::PageRequest;
use crate::response::{ApiResponse, ListResponse};
use crate::service::{CrudService, PublicCrudService};

pub struct CrudApi<S, M> {
    service: Arc<S>,
    mapper: M,
    resource: &'static str,
}

impl<S, M> CrudApi<S, M> {
    pub fn new(service: Arc<S>, mapper: M, resource: &'static str) -> Self {
        Self {
            service,
            mapper,
            resource,
        }
    }

    /// Direct service access for resource-specific endpoints.
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    fn log_failure(&self, operation: &str, err: &AppError) {
        tracing::error!(
            resource = self.resource,
            "Failed to {} {}: {}",
            operation,
            self.resource,
            err
        );
    }
}

impl<S, M> CrudApi<S, M>
where
    S: CrudService,
    M: Mapper<Entity = S::Entity>,
    S::Id: std::fmt::Display,
{
    pub async fn create(&self, request: M::Request) -> ApiResponse<M::Response> {
        let entity = self.mapper.to_entity(request);
        match self.service.save(entity).await {
            Ok(saved) => ApiResponse::success(self.mapper.to_response(&saved)),
            Err(err) => {
                self.log_failure("create", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn create_batch(&self, requests: Vec<M::Request>) -> ListResponse<M::Response> {
        let entities = self.mapper.to_entity_list(requests);
        match self.service.save_all(entities).await {
            Ok(saved) => {
                tracing::info!("Batch created {} {}s", saved.len(), self.resource);
                ListResponse::success(self.mapper.to_response_list(&saved))
            }
            Err(err) => {
                self.log_failure("batch create", &err);
                ListResponse::failure(&err)
            }
        }
    }

    pub async fn get(&self, id: S::Id) -> ApiResponse<M::Response> {
        match self.service.find_by_id(id.clone()).await {
            Ok(Some(entity)) => ApiResponse::success(self.mapper.to_response(&entity)),
            Ok(None) => ApiResponse::not_found(format!("{} {}", self.resource, id)),
            Err(err) => {
                self.log_failure("retrieve", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn list(&self, filter: S::Filter, page: PageRequest) -> ListResponse<M::Response> {
        match self.service.find_page_with_filter(&filter, &page).await {
            Ok(result) => self.mapper.page_to_response(&result),
            Err(err) => {
                self.log_failure("list", &err);
                ListResponse::failure(&err)
            }
        }
    }

    /// Unpaged "all" variant of the list endpoint.
    pub async fn list_all(&self, filter: S::Filter) -> ListResponse<M::Response> {
        match self.service.find_all_with_filter(&filter).await {
            Ok(entities) => ListResponse::success(self.mapper.to_response_list(&entities)),
            Err(err) => {
                self.log_failure("list", &err);
                ListResponse::failure(&err)
            }
        }
    }

    pub async fn update(&self, id: S::Id, request: M::Update) -> ApiResponse<M::Response> {
        let patch = self.mapper.to_patch(request);
        match self.service.update(id.clone(), &patch).await {
            Ok(updated) => {
                tracing::info!("{} updated with id: {}", self.resource, id);
                ApiResponse::success(self.mapper.to_response(&updated))
            }
            Err(AppError::NotFound) => {
                ApiResponse::not_found(format!("{} {}", self.resource, id))
            }
            Err(err) => {
                self.log_failure("update", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn delete(&self, id: S::Id) -> ApiResponse<()> {
        match self.service.delete_by_id(id.clone()).await {
            Ok(()) => {
                tracing::info!("{} deleted with id: {}", self.resource, id);
                ApiResponse::deleted(self.resource)
            }
            Err(AppError::NotFound) => {
                ApiResponse::not_found(format!("{} with id: {}", self.resource, id))
            }
            Err(err) => {
                self.log_failure("delete", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn delete_batch(&self, ids: Vec<S::Id>) -> ApiResponse<u64> {
        match self.service.delete_all_by_ids(&ids).await {
            Ok(deleted) => {
                tracing::info!("Deleted {} {}s", deleted, self.resource);
                ApiResponse::deleted_count(deleted)
            }
            Err(err) => {
                self.log_failure("batch delete", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn exists(&self, id: S::Id) -> ApiResponse<bool> {
        match self.service.exists_by_id(id).await {
            Ok(exists) => ApiResponse::exists(exists),
            Err(err) => {
                self.log_failure("check", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn count(&self, filter: Option<S::Filter>) -> ApiResponse<u64> {
        let result = match &filter {
            Some(filter) => self.service.count_with_filter(filter).await,
            None => self.service.count().await,
        };
        match result {
            Ok(count) => ApiResponse::count(count),
            Err(err) => {
                self.log_failure("count", &err);
                ApiResponse::failure(&err)
            }
        }
    }
}

/// Public-id endpoints, available only when the service's repository
/// supports public identifiers.
impl<S, M> CrudApi<S, M>
where
    S: PublicCrudService,
    M: Mapper<Entity = S::Entity>,
    S::Id: std::fmt::Display,
{
    pub async fn get_by_public_id(&self, public_id: Uuid) -> ApiResponse<M::Response> {
        match self.service.find_by_public_id(public_id).await {
            Ok(Some(entity)) => ApiResponse::success(self.mapper.to_response(&entity)),
            Ok(None) => ApiResponse::not_found(format!("{} {}", self.resource, public_id)),
            Err(err) => {
                self.log_failure("retrieve", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn update_by_public_id(
        &self,
        public_id: Uuid,
        request: M::Update,
    ) -> ApiResponse<M::Response> {
        let patch = self.mapper.to_patch(request);
        match self.service.update_by_public_id(public_id, &patch).await {
            Ok(updated) => {
                tracing::info!("{} updated with public id: {}", self.resource, public_id);
                ApiResponse::success(self.mapper.to_response(&updated))
            }
            Err(AppError::NotFound) => {
                ApiResponse::not_found(format!("{} {}", self.resource, public_id))
            }
            Err(err) => {
                self.log_failure("update", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn delete_by_public_id(&self, public_id: Uuid) -> ApiResponse<()> {
        match self.service.delete_by_public_id(public_id).await {
            Ok(()) => {
                tracing::info!("{} deleted with public id: {}", self.resource, public_id);
                ApiResponse::deleted(self.resource)
            }
            Err(AppError::NotFound) => {
                ApiResponse::not_found(format!("{} with id: {}", self.resource, public_id))
            }
            Err(err) => {
                self.log_failure("delete", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn delete_batch_by_public_ids(&self, public_ids: Vec<Uuid>) -> ApiResponse<u64> {
        match self.service.delete_all_by_public_ids(&public_ids).await {
            Ok(deleted) => {
                tracing::info!("Deleted {} {}s", deleted, self.resource);
                ApiResponse::deleted_count(deleted)
            }
            Err(err) => {
                self.log_failure("batch delete", &err);
                ApiResponse::failure(&err)
            }
        }
    }

    pub async fn exists_by_public_id(&self, public_id: Uuid) -> ApiResponse<bool> {
        match self.service.exists_by_public_id(public_id).await {
            Ok(exists) => ApiResponse::exists(exists),
            Err(err) => {
                self.log_failure("check", &err);
                ApiResponse::failure(&err)
            }
        }
    }
}
