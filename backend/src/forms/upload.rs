use chrono::NaiveDateTime;
use common::model::submission::{StoredUpload, UploadedFile};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("failed to write upload {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// True when the part after the last `.` is one of `allowed`, ignoring case.
pub fn allowed_file(file_name: &str, allowed: &[&str]) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Reduces a client-supplied filename to `[A-Za-z0-9_.-]`.
///
/// Accented letters are decomposed (NFKD) and keep their base letter, other non-ASCII
/// characters are dropped. Path separators become word breaks, whitespace runs become `_`, anything else
/// outside the safe set is dropped, and leading/trailing `.` and `_` are trimmed.
/// The result may be empty.
pub fn sanitize_filename(file_name: &str) -> String {
    let spaced: String = file_name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

/// `<YYYYMMDD_HHMMSS>_<sanitized>`
pub fn storage_name(submitted_at: NaiveDateTime, sanitized: &str) -> String {
    format!("{}{}", submitted_at.format("%Y%m%d_%H%M%S_"), sanitized)
}

/// Writes accepted resume files into the upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    allowed: &'static [&'static str],
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, allowed: &'static [&'static str]) -> Self {
        UploadStore {
            dir: dir.into(),
            allowed,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    /// Stores `file` if it is present and has an allowed extension.
    ///
    /// Absent files and files that are not accepted yield `Ok(None)`: the upload is
    /// optional and a rejected file never blocks the submission.
    pub async fn store(
        &self,
        file: Option<&UploadedFile>,
        submitted_at: NaiveDateTime,
    ) -> Result<Option<StoredUpload>, UploadError> {
        let Some(file) = file.filter(|f| !f.file_name.is_empty()) else {
            return Ok(None);
        };

        if !allowed_file(&file.file_name, self.allowed) {
            info!("Ignoring upload '{}': extension not allowed", file.file_name);
            return Ok(None);
        }

        let sanitized_name = sanitize_filename(&file.file_name);
        if sanitized_name.is_empty() {
            info!("Ignoring upload '{}': nothing left after sanitizing", file.file_name);
            return Ok(None);
        }

        let stored_name = storage_name(submitted_at, &sanitized_name);
        let path = self.dir.join(&stored_name);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|source| UploadError::Write {
                path: path.clone(),
                source,
            })?;
        info!("Stored upload {} ({} bytes)", path.display(), file.bytes.len());

        Ok(Some(StoredUpload {
            original_name: file.file_name.clone(),
            sanitized_name,
            stored_name,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    const ALLOWED: &[&str] = &["pdf", "doc", "docx"];

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .unwrap()
    }

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            bytes: b"%PDF-1.4".to_vec(),
        }
    }

    #[test]
    fn extension_check_uses_last_dot_and_ignores_case() {
        assert!(allowed_file("resume.PDF", ALLOWED));
        assert!(allowed_file("my.resume.docx", ALLOWED));
        assert!(!allowed_file("resume.pdf.exe", ALLOWED));
        assert!(!allowed_file("resume", ALLOWED));
        assert!(!allowed_file("pdf", ALLOWED));
    }

    #[test]
    fn sanitize_strips_paths_and_unsafe_characters() {
        assert_eq!(sanitize_filename("resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_filename("My Resume (final).pdf"), "My_Resume_final.pdf");
        assert_eq!(sanitize_filename("../../etc/passwd.pdf"), "etc_passwd.pdf");
        assert_eq!(sanitize_filename("C:\\Users\\ann\\cv.doc"), "C_Users_ann_cv.doc");
        assert_eq!(sanitize_filename("résumé.pdf"), "resume.pdf");
        assert_eq!(sanitize_filename("Lebenslauf_Müller.docx"), "Lebenslauf_Muller.docx");
        assert_eq!(sanitize_filename("履歴書.pdf"), "pdf");
        assert_eq!(sanitize_filename("..."), "");
    }

    #[test]
    fn storage_name_is_timestamp_prefixed() {
        assert_eq!(storage_name(at(), "resume.pdf"), "20240309_140507_resume.pdf");
    }

    #[actix_web::test]
    async fn stores_allowed_file() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path(), ALLOWED);

        let stored = store.store(Some(&file("resume.pdf")), at()).await.unwrap().unwrap();
        assert_eq!(stored.stored_name, "20240309_140507_resume.pdf");
        assert_eq!(stored.sanitized_name, "resume.pdf");
        assert_eq!(
            fs::read(dir.path().join(&stored.stored_name)).unwrap(),
            b"%PDF-1.4"
        );
    }

    #[actix_web::test]
    async fn ignores_disallowed_extension() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path(), ALLOWED);

        assert_eq!(store.store(Some(&file("resume.exe")), at()).await.unwrap(), None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn absent_or_unnamed_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path(), ALLOWED);

        assert_eq!(store.store(None, at()).await.unwrap(), None);
        assert_eq!(store.store(Some(&file("")), at()).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path().join("missing"), ALLOWED);

        let err = store.store(Some(&file("resume.pdf")), at()).await.unwrap_err();
        assert!(matches!(err, UploadError::Write { .. }));
    }

    #[test]
    fn ensure_dir_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path().join("a/b/uploads"), ALLOWED);

        store.ensure_dir().unwrap();
        assert!(store.dir().is_dir());
    }
}
