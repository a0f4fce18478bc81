use crate::requests::{CONTACT_REQUIRED_FIELDS, JOB_APPLICATION_REQUIRED_FIELDS};
use serde::{Deserialize, Serialize};

/// The two kinds of form submission that end up as an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    JobApplication,
    ContactMessage,
}

impl NotificationKind {
    /// Fields that must be present and non-empty, in the order they are checked.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            NotificationKind::JobApplication => JOB_APPLICATION_REQUIRED_FIELDS,
            NotificationKind::ContactMessage => CONTACT_REQUIRED_FIELDS,
        }
    }

    /// Page the submitter is sent back to after the form is handled.
    pub fn return_path(self) -> &'static str {
        match self {
            NotificationKind::JobApplication => "/careers",
            NotificationKind::ContactMessage => "/contact",
        }
    }
}
