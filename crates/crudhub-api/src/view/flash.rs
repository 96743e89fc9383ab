//! Flash messages carried across a redirect in a cookie.
//!
//! A mutating handler adds a message and redirects; the next rendered page
//! takes every pending message and clears the cookie, so each message is
//! shown exactly once.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Cookie holding pending flash messages.
pub const FLASH_COOKIE: &str = "crudhub_flash";

/// One pending notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Category such as `success` or `error`; used as a CSS hook.
    pub category: String,
    /// Message key, translated at render time.
    pub message: String,
}

/// Cookie-backed flash storage.
pub struct Flash;

impl Flash {
    /// Queue a message for the next rendered page.
    pub fn add(jar: CookieJar, category: &str, message_key: &str) -> CookieJar {
        let mut pending = Self::peek(&jar);
        pending.push(FlashMessage {
            category: category.to_string(),
            message: message_key.to_string(),
        });

        match serde_json::to_vec(&pending) {
            Ok(bytes) => jar.add(
                Cookie::build((FLASH_COOKIE, URL_SAFE_NO_PAD.encode(bytes)))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax),
            ),
            Err(e) => {
                warn!(error = %e, "Failed to encode flash messages");
                jar
            }
        }
    }

    /// Remove and return every pending message.
    pub fn take(jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
        if jar.get(FLASH_COOKIE).is_none() {
            return (jar, Vec::new());
        }
        let pending = Self::peek(&jar);
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, pending)
    }

    /// Pending messages without consuming them. Undecodable cookies count
    /// as empty.
    pub fn peek(jar: &CookieJar) -> Vec<FlashMessage> {
        jar.get(FLASH_COOKIE)
            .and_then(|cookie| URL_SAFE_NO_PAD.decode(cookie.value()).ok())
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }
}
