use std::sync::Arc;

use actix_web::web::Data;

use crate::domain::owner::{repository::OwnerRepository, workflow::OwnerWorkflow};

pub struct AppState<R: OwnerRepository> {
    pub owners: Data<OwnerWorkflow<R>>,
}

impl<R: OwnerRepository> AppState<R> {
    pub fn new(repo: R) -> Self {
        AppState { owners: Data::new(OwnerWorkflow::new(Arc::new(repo))) }
    }
}

impl<R: OwnerRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        AppState { owners: self.owners.clone() }
    }
}
