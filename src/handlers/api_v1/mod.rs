pub mod counts;

use actix_web::web;

/// Configure API v1 routes. Everything here is read-only, so no
/// content-type guard is needed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/counts")
            .route("", web::get().to(counts::all))
            .route("/{category}", web::get().to(counts::by_category)),
    );
}
