//! Form field names posted by the site's HTML forms.

/// Required fields of the job application form, in validation order.
pub const JOB_APPLICATION_REQUIRED_FIELDS: &[&str] = &["name", "email", "phone", "position"];

/// Required fields of the contact form, in validation order.
pub const CONTACT_REQUIRED_FIELDS: &[&str] = &["name", "email", "subject", "message"];

/// Multipart field carrying the applicant's resume.
pub const RESUME_FIELD: &str = "resume";

/// Field validated against the email pattern on both forms.
pub const EMAIL_FIELD: &str = "email";
