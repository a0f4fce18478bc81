mod apply;
mod page;

use actix_web::web;

const CAREERS_PATH: &str = "/careers";

/// Registers the `/careers` scope: the page and the application endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(CAREERS_PATH)
            .route("", web::get().to(page::process))
            .route("/apply", web::post().to(apply::process)),
    );
}
