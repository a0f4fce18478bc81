mod assets;
mod config;
mod content;
mod error;
mod flash;
mod forms;
mod notifier;
mod services;
mod state;
mod views;

#[cfg(test)]
mod test_support;

use crate::config::{AppConfig, Cli};
use crate::notifier::smtp::SmtpMailer;
use crate::state::SiteState;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use common::model::content::CollectionKind;
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.debug_mode() { "info" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(default_level));

    let config = AppConfig::from(cli);
    if !config.debug && config.uses_default_secret() {
        warn!("SECRET_KEY is not set; flash cookies are signed with the built-in default");
    }

    let mailer = SmtpMailer::new(&config.mail).map_err(|e| io::Error::other(e.to_string()))?;
    let state = SiteState::new(config, Arc::new(mailer)).map_err(|e| io::Error::other(e.to_string()))?;
    state.uploads.ensure_dir()?;

    for kind in CollectionKind::ALL {
        let path = state.content.path_of(kind);
        if !path.is_file() {
            warn!("{} not found, serving built-in {:?} content", path.display(), kind);
        }
    }

    let address = state.config.bind_address();
    info!(
        "Server running at http://{} (debug: {}, content: {}, uploads: {}, mail: {}:{})",
        address,
        state.config.debug,
        state.config.data_dir.display(),
        state.uploads.dir().display(),
        state.config.mail.server,
        state.config.mail.port
    );

    let state = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(services::configure)
            .default_service(web::to(services::not_found))
    })
    .bind(address)?
    .run()
    .await
}
