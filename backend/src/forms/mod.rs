//! # Form Submissions
//!
//! The job application and contact forms share one pipeline:
//!
//! 1.  **Read**: `reader::read_submission` collects the fields (and, for applications,
//!     the resume) from a multipart or urlencoded body, refusing bodies over the
//!     configured size limit.
//! 2.  **Validate**: `validate::FormValidator` checks the required fields in order and
//!     the email pattern.
//! 3.  **Store**: `upload::UploadStore` writes an accepted resume under a
//!     timestamp-prefixed, sanitized name. Disallowed files are dropped silently.
//! 4.  **Notify**: the notifier sends one email. A send failure is reported to the
//!     submitter but never retried.
//!
//! Every outcome except an internal error ends in a redirect back to the form page
//! with a flash message.

pub mod reader;
pub mod upload;
pub mod validate;

use crate::error::SiteError;
use crate::flash;
use crate::state::SiteState;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;
use common::model::flash::FlashMessage;
use common::model::notification::NotificationKind;
use common::requests::RESUME_FIELD;
use log::{error, info};
use reader::{read_submission, FormError};

pub const TOO_LARGE_MESSAGE: &str = "File too large. Please upload a file smaller than 16MB.";

pub fn success_message(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::JobApplication => "Your application has been submitted successfully!",
        NotificationKind::ContactMessage => {
            "Your message has been sent successfully! We will get back to you soon."
        }
    }
}

pub fn failure_message(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::JobApplication => {
            "There was an error submitting your application. Please try again."
        }
        NotificationKind::ContactMessage => {
            "There was an error sending your message. Please try again or contact us directly."
        }
    }
}

/// Runs the read, validate, store and notify steps for one submitted form.
pub async fn submit(
    req: &HttpRequest,
    payload: web::Payload,
    state: &SiteState,
    kind: NotificationKind,
) -> Result<HttpResponse, SiteError> {
    let back = kind.return_path();
    let key = &state.flash_key;

    let submission = match read_submission(req, payload, state.config.max_content_length, RESUME_FIELD).await {
        Ok(submission) => submission,
        Err(FormError::PayloadTooLarge { limit }) => {
            info!("Refused {:?} submission larger than {} bytes", kind, limit);
            return Ok(flash::redirect(key, back, FlashMessage::error(TOO_LARGE_MESSAGE)));
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = state.validator.validate(&submission.fields, kind.required_fields()) {
        info!("Rejected {:?} submission: {:?}", kind, err);
        return Ok(flash::redirect(key, back, FlashMessage::error(err.to_string())));
    }

    let submitted_at = Local::now().naive_local();
    let resume = match kind {
        NotificationKind::JobApplication => {
            state.uploads.store(submission.file.as_ref(), submitted_at).await?
        }
        NotificationKind::ContactMessage => None,
    };

    match state
        .notifier
        .notify(kind, &submission, resume.as_ref(), submitted_at)
        .await
    {
        Ok(()) => {
            info!("Delivered {:?} notification", kind);
            Ok(flash::redirect(key, back, FlashMessage::success(success_message(kind))))
        }
        Err(err) => {
            error!("Failed to send {:?} notification: {}", kind, err);
            Ok(flash::redirect(key, back, FlashMessage::error(failure_message(kind))))
        }
    }
}
