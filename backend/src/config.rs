//! # Runtime Configuration
//!
//! Command-line flags (with environment fallbacks) are parsed once at startup into
//! an immutable `AppConfig`, which is then shared with the handlers through
//! `SiteState`. Nothing reads the process environment after `main` returns from
//! `Cli::parse`.

use clap::Parser;
use std::path::PathBuf;

/// Maximum accepted request body, multipart overhead included.
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Resume extensions accepted by the upload handler (compared lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Value of `SECRET_KEY` when none is provided.
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-change-in-production";

#[derive(Parser, Debug)]
#[command(name = "ardur-site", about = "Run the Ardur Technology website")]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Run in production mode
    #[arg(long)]
    pub prod: bool,

    /// Force debug mode (overrides --prod)
    #[arg(long)]
    pub debug: bool,

    /// Directory holding the JSON content collections
    #[arg(long, env = "CONTENT_DIR", default_value = "app/data")]
    pub data_dir: PathBuf,

    /// Directory where uploaded resumes are written
    #[arg(long, env = "UPLOAD_FOLDER")]
    pub upload_dir: Option<PathBuf>,

    /// Key used to sign flash message cookies
    #[arg(long, env = "SECRET_KEY", default_value = DEFAULT_SECRET_KEY, hide_env_values = true)]
    pub secret_key: String,

    /// Public base URL used in the sitemap
    #[arg(long, env = "SITE_URL", default_value = "https://ardurtechnology.com")]
    pub site_url: String,

    #[arg(long, env = "MAIL_SERVER", default_value = "smtp.gmail.com")]
    pub mail_server: String,

    #[arg(long, env = "MAIL_PORT", default_value_t = 587)]
    pub mail_port: u16,

    #[arg(long, env = "MAIL_USE_TLS", default_value_t = true, action = clap::ArgAction::Set)]
    pub mail_use_tls: bool,

    #[arg(long, env = "MAIL_USERNAME")]
    pub mail_username: Option<String>,

    #[arg(long, env = "MAIL_PASSWORD", hide_env_values = true)]
    pub mail_password: Option<String>,

    #[arg(long, env = "MAIL_DEFAULT_SENDER", default_value = "info@ardurtechnology.com")]
    pub mail_default_sender: String,

    /// Address that receives applications and contact messages
    #[arg(long, env = "MAIL_RECIPIENT", default_value = "info@ardurtechnology.com")]
    pub mail_recipient: String,
}

impl Cli {
    /// Debug mode unless `--prod` is given; `--debug` always wins.
    pub fn debug_mode(&self) -> bool {
        self.debug || !self.prod
    }
}

/// SMTP transport settings.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub server: String,
    pub port: u16,
    pub use_tls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub default_sender: String,
    pub recipient: String,
}

impl MailSettings {
    /// Username and password, only when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

/// Immutable application configuration built once in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub secret_key: String,
    pub site_url: String,
    pub max_content_length: usize,
    pub allowed_extensions: &'static [&'static str],
    pub mail: MailSettings,
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let debug = cli.debug_mode();
        AppConfig {
            host: cli.host,
            port: cli.port,
            debug,
            data_dir: cli.data_dir,
            upload_dir: cli
                .upload_dir
                .unwrap_or_else(|| std::env::temp_dir().join("uploads")),
            secret_key: cli.secret_key,
            site_url: cli.site_url.trim_end_matches('/').to_string(),
            max_content_length: MAX_CONTENT_LENGTH,
            allowed_extensions: ALLOWED_EXTENSIONS,
            mail: MailSettings {
                server: cli.mail_server,
                port: cli.mail_port,
                use_tls: cli.mail_use_tls,
                username: cli.mail_username,
                password: cli.mail_password,
                default_sender: cli.mail_default_sender,
                recipient: cli.mail_recipient,
            },
        }
    }
}
