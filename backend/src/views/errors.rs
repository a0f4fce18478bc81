//! Error pages. These are rendered without access to the request, so they never
//! show flash messages.

use super::layout::document;
use super::{PageMeta, Section, HTML_CONTENT_TYPE};
use actix_web::HttpResponse;
use maud::html;

pub fn not_found() -> HttpResponse {
    let page = PageMeta::new(
        "Page Not Found - Ardur Technology LLC",
        "The page you are looking for could not be found.",
        Section::Other,
    );
    let body = document(
        &page,
        &[],
        html! {
            section.error-page {
                h1 { "404" }
                p { "The page you are looking for could not be found." }
                a.btn.btn-primary href="/" { "Back to Home" }
            }
        },
    );
    HttpResponse::NotFound()
        .content_type(HTML_CONTENT_TYPE)
        .body(body.into_string())
}

pub fn internal_error() -> HttpResponse {
    let page = PageMeta::new(
        "Server Error - Ardur Technology LLC",
        "Something went wrong on our side.",
        Section::Other,
    );
    let body = document(
        &page,
        &[],
        html! {
            section.error-page {
                h1 { "500" }
                p { "Something went wrong on our side. Please try again later." }
                a.btn.btn-primary href="/" { "Back to Home" }
            }
        },
    );
    HttpResponse::InternalServerError()
        .content_type(HTML_CONTENT_TYPE)
        .body(body.into_string())
}
