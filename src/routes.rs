use actix_web::{web, HttpResponse, Responder};

use crate::api::handlers::owner_handlers::{
    init_creation_form, init_find_form, init_update_owner_form, process_creation_form,
    process_find_form, process_update_owner_form, show_owner,
};
use crate::domain::owner::repository::OwnerRepository;
use crate::utils::errors::ApiError;

pub const ENTRY_POINT_BANNER: &str =
    "This is the PetClinic owners service. Start at /owners/find or /owners/new.";

async fn entry_point() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(ENTRY_POINT_BANNER)
}

pub fn public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(entry_point))
    );
}

/// `/owners/new` and `/owners/find` are registered before `/owners/{owner_id}`
/// so they are not taken for an id.
pub fn owner_routes<R: OwnerRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()));

    cfg.app_data(web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()));

    cfg.app_data(web::PathConfig::default()
        .error_handler(|err, _req| ApiError::NotFound(err.to_string()).into()));

    cfg.service(
        web::resource("/owners/new")
            .route(web::get().to(init_creation_form::<R>))
            .route(web::post().to(process_creation_form::<R>))
    );

    cfg.service(
        web::resource("/owners/find")
            .route(web::get().to(init_find_form::<R>))
    );

    cfg.service(
        web::resource("/owners")
            .route(web::get().to(process_find_form::<R>))
    );

    cfg.service(
        web::resource("/owners/{owner_id}/edit")
            .route(web::get().to(init_update_owner_form::<R>))
            .route(web::post().to(process_update_owner_form::<R>))
    );

    cfg.service(
        web::resource("/owners/{owner_id}")
            .route(web::get().to(show_owner::<R>))
    );
}
