mod services;

use actix_web::web;

const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the JSON API.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).route("/services", web::get().to(services::process))
}
