//! # Job Application Service
//!
//! Backend for `POST /careers/apply`. The posted form (normally multipart, with an
//! optional `resume` file) goes through `forms::submit`:
//!
//! 1.  `name`, `email`, `phone` and `position` are required, in that order, and the
//!     email must match the address pattern.
//! 2.  A resume with an allowed extension is written to the upload directory as
//!     `<YYYYMMDD_HHMMSS>_<sanitized name>`. Any other file is dropped without telling
//!     the applicant.
//! 3.  One notification email goes to the recruiting inbox.
//!
//! Every outcome redirects back to `/careers` with a flash message.

use crate::error::SiteError;
use crate::forms;
use crate::state::SiteState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::notification::NotificationKind;

pub async fn process(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<SiteState>,
) -> Result<HttpResponse, SiteError> {
    forms::submit(&req, payload, &state, NotificationKind::JobApplication).await
}
