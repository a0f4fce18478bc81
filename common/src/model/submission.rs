use std::collections::HashMap;

/// A file part received with a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename as sent by the browser. Untrusted.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The request-scoped content of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl FormSubmission {
    /// Returns the raw value of a field, empty strings included.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the value of a field only if it is present and non-empty.
    pub fn filled(&self, name: &str) -> Option<&str> {
        self.field(name).filter(|value| !value.is_empty())
    }
}

/// A file that was accepted and written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub original_name: String,
    pub sanitized_name: String,
    /// `<YYYYMMDD_HHMMSS>_<sanitized_name>`, the name on disk.
    pub stored_name: String,
}
