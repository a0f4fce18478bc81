//! One-shot messages carried across a redirect in a signed cookie.
//!
//! A form handler redirects with `redirect`, the next rendered page reads the
//! messages with `take` and clears the cookie with `clear`.

use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use common::model::flash::FlashMessage;
use log::{error, warn};
use sha2::{Digest, Sha512};

pub const FLASH_COOKIE: &str = "flash";

/// Derives the cookie signing key from the configured secret.
pub fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

/// Builds the signed cookie holding `messages`.
pub fn flash_cookie(key: &Key, messages: &[FlashMessage]) -> Option<Cookie<'static>> {
    let json = match serde_json::to_vec(messages) {
        Ok(json) => json,
        Err(err) => {
            error!("Failed to encode flash messages: {}", err);
            return None;
        }
    };

    let mut jar = CookieJar::new();
    jar.signed_mut(key).add(
        Cookie::build(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(json))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish(),
    );
    jar.get(FLASH_COOKIE).cloned()
}

/// Verifies and decodes a flash cookie. Tampered or garbled cookies yield nothing.
pub fn messages_from(key: &Key, cookie: Cookie<'static>) -> Vec<FlashMessage> {
    let mut jar = CookieJar::new();
    jar.add_original(cookie);
    jar.signed(key)
        .get(FLASH_COOKIE)
        .and_then(|verified| URL_SAFE_NO_PAD.decode(verified.value()).ok())
        .and_then(|json| serde_json::from_slice(&json).ok())
        .unwrap_or_default()
}

/// Flash messages sent with the request, if any.
pub fn take(req: &HttpRequest, key: &Key) -> Vec<FlashMessage> {
    req.cookie(FLASH_COOKIE)
        .map(|cookie| messages_from(key, cookie))
        .unwrap_or_default()
}

/// `302 Found` to `location`, carrying `message` to the next page.
pub fn redirect(key: &Key, location: &str, message: FlashMessage) -> HttpResponse {
    let mut response = HttpResponse::Found();
    response.insert_header((header::LOCATION, location));
    if let Some(cookie) = flash_cookie(key, &[message]) {
        response.cookie(cookie);
    }
    response.finish()
}

/// Expires the flash cookie on the client.
pub fn clear(response: &mut HttpResponse) {
    let removal = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    if let Err(err) = response.add_removal_cookie(&removal) {
        warn!("Failed to clear flash cookie: {}", err);
    }
}
