//! Stylesheets and scripts compiled into the binary from `backend/static`.

use crate::error::SiteError;
use actix_web::{web, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

/// `GET /static/{path}`: an embedded file, or the 404 page.
pub async fn serve(path: web::Path<String>) -> Result<HttpResponse, SiteError> {
    let file_path = path.trim_start_matches('/');
    let file = STATIC_DIR.get_file(file_path).ok_or(SiteError::NotFound)?;

    let mime = from_path(file_path).first_or_octet_stream();
    Ok(HttpResponse::Ok()
        .content_type(mime.as_ref())
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .body(file.contents()))
}
