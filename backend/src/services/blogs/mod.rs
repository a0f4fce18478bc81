mod detail;
mod list;

use actix_web::web;

/// Posts shown under a blog post.
pub const RELATED_LIMIT: usize = 3;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/blogs", web::get().to(list::process))
        .route("/blog/{slug}", web::get().to(detail::process));
}
