//! # Views
//!
//! Server-side HTML rendered with [maud](https://maud.lambda.xyz/). Content records
//! are loosely typed JSON trees, so the catalog views read the fields they know
//! (`title`, `subtitle`, `excerpt`, ...) and render everything else generically
//! through `record::value`.

pub mod catalog;
pub mod errors;
pub mod layout;
pub mod pages;
pub mod record;

use crate::flash::{self, FLASH_COOKIE};
use crate::state::SiteState;
use actix_web::{HttpRequest, HttpResponse};
use maud::Markup;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Navigation section a page belongs to, used to highlight the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Industries,
    Leadership,
    CaseStudies,
    Blogs,
    Careers,
    Contact,
    Other,
}

/// Title and meta description of a rendered page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub section: Section,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, section: Section) -> Self {
        PageMeta {
            title: title.into(),
            description: description.into(),
            section,
        }
    }
}

/// Wraps `content` in the site layout, showing and clearing pending flash messages.
pub fn render(req: &HttpRequest, state: &SiteState, page: &PageMeta, content: Markup) -> HttpResponse {
    let flashes = flash::take(req, &state.flash_key);
    let body = layout::document(page, &flashes, content);

    let mut response = HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(body.into_string());
    if req.cookie(FLASH_COOKIE).is_some() {
        flash::clear(&mut response);
    }
    response
}
