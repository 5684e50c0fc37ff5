//! Generic mapper and patch contracts.
//!
//! A `Mapper` translates between a persisted entity and its request,
//! update and response DTOs. Partial updates are expressed as explicit
//! `Patch` values applied by a pure function, so "which fields change" is
//! data, not a captured closure.

use crate::pagination::Page;
use crate::response::ListResponse;

/// A partial update: applies the fields it carries onto an entity in place,
/// leaving everything else untouched.
pub trait Patch<E>: Send + Sync {
    fn apply(&self, entity: &mut E);
}

/// Per-resource translation between entities and transfer shapes.
pub trait Mapper: Send + Sync {
    type Entity;
    type Request;
    type Update;
    type Response;
    type Patch: Patch<Self::Entity>;

    /// Entity to outgoing response DTO.
    fn to_response(&self, entity: &Self::Entity) -> Self::Response;

    /// Incoming create request to a new entity.
    fn to_entity(&self, request: Self::Request) -> Self::Entity;

    /// Incoming update request to an explicit patch value.
    fn to_patch(&self, request: Self::Update) -> Self::Patch;

    fn to_response_list(&self, entities: &[Self::Entity]) -> Vec<Self::Response> {
        entities.iter().map(|e| self.to_response(e)).collect()
    }

    fn to_entity_list(&self, requests: Vec<Self::Request>) -> Vec<Self::Entity> {
        requests.into_iter().map(|r| self.to_entity(r)).collect()
    }

    /// Entity page to a paginated list envelope.
    fn page_to_response(&self, page: &Page<Self::Entity>) -> ListResponse<Self::Response> {
        ListResponse::paged(
            self.to_response_list(&page.items),
            page.page,
            page.size,
            page.total,
        )
    }
}
