use actix_web::{web, Responder, ResponseError};
use serde::Deserialize;

use crate::{api::state::AppState, domain::owner::{model::OwnerReceive, repository::OwnerRepository}};

#[derive(Deserialize, Debug)]
pub struct FindOwnersQuery {
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

pub async fn init_creation_form<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>
) -> impl Responder {
    state.owners.init_creation_form().into_response()
}

pub async fn process_creation_form<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>,
    owner: web::Form<OwnerReceive>
) -> impl Responder {
    match state.owners.process_creation_form(owner.into_inner()).await {
        Ok(result) => result.into_response(),
        Err(e) => e.error_response()
    }
}

pub async fn init_find_form<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>
) -> impl Responder {
    state.owners.init_find_form().into_response()
}

pub async fn process_find_form<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>,
    query: web::Query<FindOwnersQuery>
) -> impl Responder {
    match state.owners.process_find_form(query.into_inner().last_name).await {
        Ok(result) => result.into_response(),
        Err(e) => e.error_response()
    }
}

pub async fn init_update_owner_form<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>,
    owner_id: web::Path<i64>
) -> impl Responder {
    match state.owners.init_update_form(owner_id.into_inner()).await {
        Ok(result) => result.into_response(),
        Err(e) => e.error_response()
    }
}

pub async fn process_update_owner_form<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>,
    owner_id: web::Path<i64>,
    owner: web::Form<OwnerReceive>
) -> impl Responder {
    match state.owners.process_update_form(owner_id.into_inner(), owner.into_inner()).await {
        Ok(result) => result.into_response(),
        Err(e) => e.error_response()
    }
}

pub async fn show_owner<R: OwnerRepository + 'static>(
    state: web::Data<AppState<R>>,
    owner_id: web::Path<i64>
) -> impl Responder {
    match state.owners.show_owner(owner_id.into_inner()).await {
        Ok(result) => result.into_response(),
        Err(e) => e.error_response()
    }
}
