//! HTTP-facing errors.
//!
//! Only failures that end the request with an error page live here. Form problems
//! (validation, oversized bodies, mail failures) are answered with a redirect and
//! a flash message by the form handlers instead.

use crate::content::SlugNotFound;
use crate::forms::reader::FormError;
use crate::forms::upload::UploadError;
use crate::views;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("page not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SlugNotFound> for SiteError {
    fn from(_: SlugNotFound) -> Self {
        SiteError::NotFound
    }
}

impl From<UploadError> for SiteError {
    fn from(err: UploadError) -> Self {
        SiteError::Internal(err.to_string())
    }
}

impl From<FormError> for SiteError {
    fn from(err: FormError) -> Self {
        SiteError::BadRequest(err.to_string())
    }
}

impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound => StatusCode::NOT_FOUND,
            SiteError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SiteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SiteError::NotFound => views::errors::not_found(),
            SiteError::BadRequest(reason) => HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Bad Request: {}", reason)),
            SiteError::Internal(reason) => {
                error!("Internal error: {}", reason);
                views::errors::internal_error()
            }
        }
    }
}
