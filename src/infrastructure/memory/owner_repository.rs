use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::owner::model::Owner;
use crate::domain::owner::repository::OwnerRepository;
use crate::utils::errors::ApiError;

#[derive(Debug, Default)]
pub struct OwnerStore {
    owners: BTreeMap<i64, Owner>,
    last_id: i64,
}

/// Process-local owner store. A session holds the store lock, so the calls
/// made within one request never interleave with another request's.
#[derive(Clone, Default)]
pub struct InMemoryOwnerRepository {
    store: Arc<Mutex<OwnerStore>>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    type Session = OwnedMutexGuard<OwnerStore>;

    async fn session(&self) -> Result<Self::Session, ApiError> {
        Ok(Arc::clone(&self.store).lock_owned().await)
    }

    async fn save(&self, session: &mut Self::Session, mut owner: Owner) -> Result<Owner, ApiError> {
        let id = match owner.id {
            Some(id) if session.owners.contains_key(&id) => id,
            Some(id) => return Err(ApiError::owner_not_found(id)),
            None => {
                session.last_id += 1;
                owner.id = Some(session.last_id);
                session.last_id
            }
        };

        session.owners.insert(id, owner.clone());
        Ok(owner)
    }

    async fn find_by_id(&self, session: &mut Self::Session, id: i64) -> Result<Option<Owner>, ApiError> {
        Ok(session.owners.get(&id).cloned())
    }

    async fn find_by_last_name(&self, session: &mut Self::Session, last_name: &str) -> Result<Vec<Owner>, ApiError> {
        Ok(session
            .owners
            .values()
            .filter(|owner| owner.last_name.starts_with(last_name))
            .cloned()
            .collect())
    }
}
