pub mod api_v1;
pub mod dashboard;

use actix_web::HttpResponse;

/// The dashboard is the landing page.
pub async fn root_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// Fallback for unknown paths; must be registered last.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/errors/404.html"))
}
