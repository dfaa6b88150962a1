use async_trait::async_trait;

use crate::{domain::owner::model::Owner, utils::errors::ApiError};

/// Persistence collaborator for owners.
///
/// Every call takes the request's `Session`, acquired once through
/// [`OwnerRepository::session`] and released when the caller drops it. A session
/// scopes the calls of one request; it does not make them one atomic transaction.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    type Session: Send;

    async fn session(&self) -> Result<Self::Session, ApiError>;

    /// Inserts a new owner with a fresh id, or replaces the stored owner in place
    /// when `owner.id` is set. Replacing an unknown id is `ApiError::NotFound`.
    async fn save(&self, session: &mut Self::Session, owner: Owner) -> Result<Owner, ApiError>;

    async fn find_by_id(&self, session: &mut Self::Session, id: i64) -> Result<Option<Owner>, ApiError>;

    /// Owners whose last name starts with `last_name`, ordered by id.
    async fn find_by_last_name(&self, session: &mut Self::Session, last_name: &str) -> Result<Vec<Owner>, ApiError>;
}
