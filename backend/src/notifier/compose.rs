use chrono::NaiveDateTime;
use common::model::notification::NotificationKind;
use common::model::submission::{FormSubmission, StoredUpload};

const NOT_SPECIFIED: &str = "Not specified";
const NO_COVER_LETTER: &str = "No cover letter provided";
const NO_RESUME: &str = "No resume uploaded";

pub fn subject(kind: NotificationKind, submission: &FormSubmission) -> String {
    match kind {
        NotificationKind::JobApplication => format!(
            "New Job Application - {}",
            submission.field("position").unwrap_or_default()
        ),
        NotificationKind::ContactMessage => format!(
            "Contact Form: {}",
            submission.field("subject").unwrap_or_default()
        ),
    }
}

pub fn body(
    kind: NotificationKind,
    submission: &FormSubmission,
    resume: Option<&StoredUpload>,
    submitted_at: NaiveDateTime,
) -> String {
    let value = |name: &str| submission.field(name).unwrap_or_default();
    let optional = |name: &str, placeholder: &'static str| -> String {
        submission.filled(name).unwrap_or(placeholder).to_string()
    };
    let timestamp = submitted_at.format("%Y-%m-%d %H:%M:%S");

    match kind {
        NotificationKind::JobApplication => format!(
            "New job application received:\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Position: {}\n\
             Experience: {}\n\
             Cover Letter: {}\n\
             Resume: {}\n\
             \n\
             Submitted on: {}\n",
            value("name"),
            value("email"),
            value("phone"),
            value("position"),
            optional("experience", NOT_SPECIFIED),
            optional("cover_letter", NO_COVER_LETTER),
            resume.map_or(NO_RESUME, |r| r.stored_name.as_str()),
            timestamp,
        ),
        NotificationKind::ContactMessage => format!(
            "New contact form submission:\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Phone: {}\n\
             Subject: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             Submitted on: {}\n",
            value("name"),
            value("email"),
            optional("company", NOT_SPECIFIED),
            optional("phone", NOT_SPECIFIED),
            value("subject"),
            value("message"),
            timestamp,
        ),
    }
}
