//! Cookie access behind an injectable interface.
//!
//! The guard never touches a request or response object directly; it reads
//! and removes cookies through [`CookieStore`] so the flow stays testable
//! with an in-memory store. [`RequestCookies`] is the production
//! implementation backed by request headers.

use std::collections::HashMap;

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

/// Request-scoped cookie access: read named values, remove named cookies
/// from the outgoing response.
pub trait CookieStore {
    /// Value of the named cookie, if the request carried it.
    fn get(&self, name: &str) -> Option<String>;

    /// Remove the named cookie from the outgoing response.
    fn remove(&mut self, name: &str);
}

/// Cookie store parsed from request headers.
///
/// Removals are recorded rather than applied in place; callers drain them as
/// expiring `Set-Cookie` values via [`RequestCookies::removal_headers`].
#[derive(Debug, Clone, Default)]
pub struct RequestCookies {
    values: HashMap<String, String>,
    removed: Vec<String>,
}

impl RequestCookies {
    /// Parses all `Cookie` headers into a name/value map.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut values = HashMap::new();
        for header in headers.get_all(COOKIE) {
            let Ok(raw) = header.to_str() else { continue };
            for pair in raw.split(';') {
                let trimmed = pair.trim();
                let mut parts = trimmed.splitn(2, '=');
                let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
                    continue;
                };
                // First occurrence wins, matching client ordering for duplicates.
                values
                    .entry(name.trim().to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }
        Self {
            values,
            removed: Vec::new(),
        }
    }

    /// One expiring `Set-Cookie` value per removed cookie.
    ///
    /// Attributes must match the ones the cookie was issued with, otherwise
    /// the client keeps the original cookie alive.
    #[must_use]
    pub fn removal_headers(&self) -> Vec<HeaderValue> {
        self.removed
            .iter()
            .filter_map(|name| {
                HeaderValue::from_str(&format!(
                    "{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
                ))
                .ok()
            })
            .collect()
    }
}

impl CookieStore for RequestCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn remove(&mut self, name: &str) {
        self.values.remove(name);
        // Record the removal even when the request carried no such cookie;
        // the response must clear whatever the client may still hold.
        if !self.removed.iter().any(|existing| existing == name) {
            self.removed.push(name.to_string());
        }
    }
}
