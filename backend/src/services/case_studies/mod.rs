mod detail;
mod list;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/case-studies", web::get().to(list::process))
        .route("/case-study/{slug}", web::get().to(detail::process));
}
