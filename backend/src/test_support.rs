//! Fixtures shared by the unit and HTTP tests.

use crate::config::{AppConfig, MailSettings, ALLOWED_EXTENSIONS, MAX_CONTENT_LENGTH};
use crate::flash;
use crate::notifier::{MailTransport, NotifyError, OutgoingEmail};
use crate::services;
use crate::state::SiteState;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App};
use chrono::{NaiveDate, NaiveDateTime};
use common::model::content::CollectionKind;
use common::model::flash::FlashMessage;
use common::model::submission::FormSubmission;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const BOUNDARY: &str = "----ardur-test-boundary";

/// 2024-03-09 14:05:07, the submission time used across tests.
pub fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|date| date.and_hms_opt(14, 5, 7))
        .unwrap()
}

pub fn mail_settings() -> MailSettings {
    MailSettings {
        server: "smtp.example.com".to_string(),
        port: 587,
        use_tls: true,
        username: None,
        password: None,
        default_sender: "info@ardurtechnology.com".to_string(),
        recipient: "hr@example.com".to_string(),
    }
}

pub fn submission(fields: &[(&str, &str)]) -> FormSubmission {
    FormSubmission {
        fields: fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        file: None,
    }
}

/// Records every message instead of sending it.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailTransport for RecordingTransport {
    fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Refuses every message, like an unreachable SMTP server.
pub struct FailingTransport;

impl MailTransport for FailingTransport {
    fn send(&self, _email: &OutgoingEmail) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("connection refused".to_string()))
    }
}

/// Encodes `fields` and an optional `(field, file name, bytes)` part as
/// `multipart/form-data`. Returns the content type and the body.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Full response body as text.
pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

/// Flash messages carried by a redirect response.
pub fn flashes_of<B>(site: &TestSite, resp: &ServiceResponse<B>) -> Vec<FlashMessage> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == flash::FLASH_COOKIE)
        .map(|cookie| flash::messages_from(&site.state.flash_key, cookie.into_owned()))
        .unwrap_or_default()
}

/// A site over temporary content and upload directories, mailing into a recorder.
pub struct TestSite {
    pub data_dir: TempDir,
    pub upload_dir: TempDir,
    pub transport: Arc<RecordingTransport>,
    pub state: web::Data<SiteState>,
}

impl TestSite {
    pub fn new() -> Self {
        let transport = Arc::new(RecordingTransport::default());
        Self::build(transport.clone(), transport)
    }

    /// A site whose mail transport always fails.
    pub fn failing() -> Self {
        Self::build(Arc::new(FailingTransport), Arc::new(RecordingTransport::default()))
    }

    fn build(mailer: Arc<dyn MailTransport>, transport: Arc<RecordingTransport>) -> Self {
        let data_dir = TempDir::new().unwrap();
        let upload_dir = TempDir::new().unwrap();
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: true,
            data_dir: data_dir.path().to_path_buf(),
            upload_dir: upload_dir.path().to_path_buf(),
            secret_key: "test-secret".to_string(),
            site_url: "https://ardur.test".to_string(),
            max_content_length: MAX_CONTENT_LENGTH,
            allowed_extensions: ALLOWED_EXTENSIONS,
            mail: mail_settings(),
        };
        let state = web::Data::new(SiteState::new(config, mailer).unwrap());
        TestSite {
            data_dir,
            upload_dir,
            transport,
            state,
        }
    }

    pub fn write_content(&self, kind: CollectionKind, body: &str) {
        fs::write(self.data_dir.path().join(kind.file_name()), body).unwrap();
    }

    /// Names of the files written to the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.upload_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(services::configure)
            .default_service(web::to(services::not_found))
    }
}
