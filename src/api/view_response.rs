use actix_web::{http::header, HttpResponse};

use crate::domain::view::ViewResult;

impl ViewResult {
    /// Rendered views answer 200 with the view as JSON, redirects answer 302.
    pub fn into_response(self) -> HttpResponse {
        match self {
            ViewResult::Render(view) => HttpResponse::Ok().json(view),
            ViewResult::Redirect(url) => HttpResponse::Found()
                .insert_header((header::LOCATION, url))
                .finish(),
        }
    }
}
