//! Server-side session store
//!
//! Sessions live in process memory only: a random token (carried in an
//! HttpOnly cookie) maps to the identity marker of the logged-in user plus an
//! expiry instant. Nothing session-related touches durable storage, so a
//! restart logs everyone out.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Length of the session token in bytes (hex-encoded in the cookie).
const TOKEN_LEN: usize = 32;

/// Identity marker for one authenticated browser session.
#[derive(Debug, Clone)]
struct Session {
    username: String,
    expires_at: DateTime<Utc>,
}

/// In-process session store shared across request handlers.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(ttl_seconds as i64),
        }
    }

    /// Create a session for `username` and return its token.
    pub async fn create(&self, username: &str) -> String {
        let mut bytes = [0u8; TOKEN_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        let session = Session {
            username: username.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Resolve a token to its username. Expired sessions count as absent and
    /// are removed on the way out.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > Utc::now() => {
                    return Some(session.username.clone());
                }
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }
        self.sessions.write().await.remove(token);
        None
    }

    /// Destroy a session. Returns whether a session existed for the token.
    pub async fn destroy(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Number of live entries (expired ones linger until resolved).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Extract the session token from a request's `Cookie` header.
///
/// The header format is `name1=value1; name2=value2`.
pub fn token_from_headers(headers: &axum::http::HeaderMap, cookie_name: &str) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let name = parts.next()?.trim();
        let value = parts.next()?.trim();
        if name == cookie_name {
            return Some(value.to_string());
        }
    }
    None
}

/// Build the `Set-Cookie` value that installs a session token.
pub fn session_cookie(cookie_name: &str, token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, token)
}

/// Build the `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie(cookie_name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", cookie_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    #[tokio::test]
    async fn test_create_and_resolve() {
        let store = SessionStore::new(3600);
        let token = store.create("alice").await;
        assert_eq!(token.len(), TOKEN_LEN * 2);
        assert_eq!(store.resolve(&token).await.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let store = SessionStore::new(3600);
        assert_eq!(store.resolve("deadbeef").await, None);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = SessionStore::new(3600);
        let t1 = store.create("alice").await;
        let t2 = store.create("alice").await;
        assert_ne!(t1, t2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_destroy_logs_out() {
        let store = SessionStore::new(3600);
        let token = store.create("alice").await;
        assert!(store.destroy(&token).await);
        assert_eq!(store.resolve(&token).await, None);
        assert!(!store.destroy(&token).await);
    }

    #[tokio::test]
    async fn test_expired_session_counts_as_absent() {
        // Zero-second TTL is invalid config, but the store itself treats any
        // past expiry as absent.
        let store = SessionStore::new(0);
        let token = store.create("alice").await;
        assert_eq!(store.resolve(&token).await, None);
        // And the expired entry was pruned.
        assert_eq!(store.len().await, 0);
    }

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; sitedesk_session=abc123; lang=en"),
        );
        assert_eq!(
            token_from_headers(&headers, "sitedesk_session").as_deref(),
            Some("abc123")
        );
        assert_eq!(token_from_headers(&headers, "other"), None);
        assert_eq!(token_from_headers(&HeaderMap::new(), "sitedesk_session"), None);
    }

    #[test]
    fn test_cookie_values() {
        let set = session_cookie("sitedesk_session", "abc123");
        assert!(set.starts_with("sitedesk_session=abc123"));
        assert!(set.contains("HttpOnly"));

        let clear = clear_session_cookie("sitedesk_session");
        assert!(clear.contains("Max-Age=0"));
    }
}
