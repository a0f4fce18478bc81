//! Fixed pages. Only `/leadership` reads content; the rest are static markup.

mod leadership;
mod static_pages;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(static_pages::home))
        .route("/about", web::get().to(static_pages::about))
        .route("/industries", web::get().to(static_pages::industries))
        .route("/privacy-policy", web::get().to(static_pages::privacy_policy))
        .route("/leadership", web::get().to(leadership::process));
}
