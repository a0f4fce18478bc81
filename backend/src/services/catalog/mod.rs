//! Service catalog: the overview, one page per category and one per service.

mod category;
mod detail;
mod overview;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/services", web::get().to(overview::process))
        .route("/services/{category}", web::get().to(category::process))
        .route("/service/{slug}", web::get().to(detail::process));
}
