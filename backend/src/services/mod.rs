//! # HTTP Routes
//!
//! Each sub-module owns one area of the site and registers its routes through a
//! `configure_routes` function, mirroring the URL layout:
//!
//! - `pages`: `/`, `/about`, `/industries`, `/leadership`, `/privacy-policy`
//! - `catalog`: `/services`, `/services/{category}`, `/service/{slug}`
//! - `blogs`: `/blogs`, `/blog/{slug}`
//! - `case_studies`: `/case-studies`, `/case-study/{slug}`
//! - `careers`: `/careers`, `POST /careers/apply`
//! - `contact`: `GET|POST /contact`
//! - `api`: `/api/services`
//! - `meta`: `/robots.txt`, `/sitemap.xml`, `/.well-known/*`
//!
//! Unknown paths fall through to `not_found`.

pub mod api;
pub mod blogs;
pub mod careers;
pub mod case_studies;
pub mod catalog;
pub mod contact;
pub mod meta;
pub mod pages;

use crate::assets;
use crate::error::SiteError;
use crate::views::record::{text, truncate};
use actix_web::{web, HttpResponse};
use common::model::content::Record;

/// Longest meta description derived from a record.
const DESCRIPTION_LIMIT: usize = 160;

/// Registers every route of the site.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure_routes)
        .configure(catalog::configure_routes)
        .configure(blogs::configure_routes)
        .configure(case_studies::configure_routes)
        .configure(careers::configure_routes)
        .configure(contact::configure_routes)
        .configure(meta::configure_routes)
        .service(api::configure_routes())
        .route("/static/{path:.*}", web::get().to(assets::serve));
}

/// `title` of a content record, or `fallback` when it has none.
pub(crate) fn record_title<'a>(record: &'a Record, fallback: &'a str) -> &'a str {
    text(record, "title").unwrap_or(fallback)
}

/// First `DESCRIPTION_LIMIT` characters of a record field, empty when absent.
pub(crate) fn record_summary(record: &Record, key: &str) -> String {
    truncate(text(record, key).unwrap_or_default(), DESCRIPTION_LIMIT)
}

/// Default service: renders the 404 page.
pub async fn not_found() -> Result<HttpResponse, SiteError> {
    Err(SiteError::NotFound)
}
