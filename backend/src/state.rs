//! Shared, read-only application state handed to every handler as `web::Data`.

use crate::config::AppConfig;
use crate::content::ContentStore;
use crate::flash;
use crate::forms::upload::UploadStore;
use crate::forms::validate::FormValidator;
use crate::notifier::{MailTransport, Notifier};
use actix_web::cookie::Key;
use std::sync::Arc;

pub struct SiteState {
    pub config: AppConfig,
    pub content: ContentStore,
    pub uploads: UploadStore,
    pub validator: FormValidator,
    pub notifier: Notifier,
    pub flash_key: Key,
}

impl SiteState {
    pub fn new(config: AppConfig, transport: Arc<dyn MailTransport>) -> Result<Self, regex::Error> {
        Ok(SiteState {
            content: ContentStore::new(&config.data_dir),
            uploads: UploadStore::new(&config.upload_dir, config.allowed_extensions),
            validator: FormValidator::new()?,
            notifier: Notifier::new(transport, &config.mail),
            flash_key: flash::signing_key(&config.secret_key),
            config,
        })
    }
}
