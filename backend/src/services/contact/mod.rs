mod page;
mod send;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::get().to(page::process))
            .route(web::post().to(send::process)),
    );
}
