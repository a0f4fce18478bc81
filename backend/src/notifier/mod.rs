//! # Notifier
//!
//! Turns an accepted form submission into a plaintext email and hands it to a
//! `MailTransport`. Delivery is attempted once: a failure is returned to the caller,
//! which tells the submitter and moves on. Nothing is queued or retried.
//!
//! - `compose`: subject and body text for each `NotificationKind`.
//! - `smtp`: the production transport, backed by `lettre`.

pub mod compose;
pub mod smtp;

use crate::config::MailSettings;
use actix_web::web;
use chrono::NaiveDateTime;
use common::model::notification::NotificationKind;
use common::model::submission::{FormSubmission, StoredUpload};
use common::requests::EMAIL_FIELD;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("invalid address '{address}': {reason}")]
    Address { address: String, reason: String },
    #[error("failed to build message: {0}")]
    Message(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
    #[error("mail worker failed: {0}")]
    Worker(String),
}

/// A fully composed message, independent of the transport that sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Sends one message, blocking until the transport accepts or refuses it.
pub trait MailTransport: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError>;
}

#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn MailTransport>,
    sender: String,
    recipient: String,
}

impl Notifier {
    pub fn new(transport: Arc<dyn MailTransport>, settings: &MailSettings) -> Self {
        Notifier {
            transport,
            sender: settings.default_sender.clone(),
            recipient: settings.recipient.clone(),
        }
    }

    pub fn compose(
        &self,
        kind: NotificationKind,
        submission: &FormSubmission,
        resume: Option<&StoredUpload>,
        submitted_at: NaiveDateTime,
    ) -> OutgoingEmail {
        let reply_to = match kind {
            NotificationKind::ContactMessage => submission.filled(EMAIL_FIELD).map(str::to_string),
            NotificationKind::JobApplication => None,
        };

        OutgoingEmail {
            from: self.sender.clone(),
            to: vec![self.recipient.clone()],
            reply_to,
            subject: compose::subject(kind, submission),
            body: compose::body(kind, submission, resume, submitted_at),
        }
    }

    /// Composes the message and sends it on the blocking thread pool.
    pub async fn notify(
        &self,
        kind: NotificationKind,
        submission: &FormSubmission,
        resume: Option<&StoredUpload>,
        submitted_at: NaiveDateTime,
    ) -> Result<(), NotifyError> {
        let email = self.compose(kind, submission, resume, submitted_at);
        let transport = Arc::clone(&self.transport);
        web::block(move || transport.send(&email))
            .await
            .map_err(|err| NotifyError::Worker(err.to_string()))?
    }
}
