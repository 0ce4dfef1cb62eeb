//! Signed Cookies
//!
//! One-shot flash messages and the per-client CSRF token, both carried in
//! cookies signed with the configured secret key.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use rand::{distr::Alphanumeric, Rng};

/// Cookie holding the confirmation shown on the next listing render.
pub const FLASH_COOKIE: &str = "flash";

/// Cookie holding the token the intake form must echo back.
pub const CSRF_COOKIE: &str = "csrf_token";

const CSRF_TOKEN_LEN: usize = 32;

fn build(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Queue a message for the next page view.
pub fn set_flash(jar: SignedCookieJar, message: String) -> SignedCookieJar {
    jar.add(build(FLASH_COOKIE, message))
}

/// Read the pending flash message and clear it so it is shown only once.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
            (jar, Some(message))
        }
        None => (jar, None),
    }
}

/// The CSRF token bound to this client, if it has one.
pub fn csrf_token(jar: &SignedCookieJar) -> Option<String> {
    jar.get(CSRF_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Reuse the client's CSRF token, issuing a new one when absent.
pub fn ensure_csrf_token(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    match csrf_token(&jar) {
        Some(token) => (jar, token),
        None => {
            let token = generate_token();
            let jar = jar.add(build(CSRF_COOKIE, token.clone()));
            (jar, token)
        }
    }
}

fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LEN)
        .map(char::from)
        .collect()
}
