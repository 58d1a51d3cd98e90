//! Passphrase gate and session tokens for the publishing console.
//!
//! The gate is a single static passphrase compared verbatim. There is no
//! hashing, lockout, or rate limiting: it keeps casual visitors out of the
//! publishing console and nothing more. Anyone holding the passphrase is
//! the admin.

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Proof that a request presented a live admin token.
///
/// Privileged handlers require this value, so a mutation cannot be reached
/// without going through [`AdminGate::authorize`] first.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession(());

/// Issues and tracks admin session tokens in memory.
///
/// Tokens live for the lifetime of the process. A restart signs everyone
/// out, which is acceptable for a single-admin site.
pub struct AdminGate {
    passphrase: String,
    sessions: DashMap<String, DateTime<Utc>>,
}

impl AdminGate {
    /// Creates a gate around the configured passphrase.
    pub fn new(passphrase: String) -> Self {
        Self {
            passphrase,
            sessions: DashMap::new(),
        }
    }

    /// Checks the attempt against the passphrase and mints a token on match.
    pub fn login(&self, attempt: &str) -> Option<String> {
        if attempt != self.passphrase {
            return None;
        }
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), Utc::now());
        Some(token)
    }

    /// Revokes a previously issued token. Unknown tokens are a no-op.
    pub fn logout(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Exchanges a live token for session proof.
    pub fn authorize(&self, token: &str) -> Option<AdminSession> {
        if self.sessions.contains_key(token) {
            Some(AdminSession(()))
        } else {
            None
        }
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn correct_passphrase_issues_a_live_token() {
        let gate = AdminGate::new("open-sesame".into());
        let token = gate.login("open-sesame").unwrap();
        assert!(gate.authorize(&token).is_some());
    }

    #[test]
    fn wrong_passphrase_is_rejected() {
        let gate = AdminGate::new("open-sesame".into());
        assert!(gate.login("guess").is_none());
        assert!(gate.login("").is_none());
    }

    #[test]
    fn each_login_mints_a_distinct_token() {
        let gate = AdminGate::new("pw".into());
        let first = gate.login("pw").unwrap();
        let second = gate.login("pw").unwrap();
        assert_ne!(first, second);
        assert!(gate.authorize(&first).is_some());
        assert!(gate.authorize(&second).is_some());
    }

    #[test]
    fn logout_revokes_only_the_presented_token() {
        let gate = AdminGate::new("pw".into());
        let token = gate.login("pw").unwrap();
        let other = gate.login("pw").unwrap();

        assert!(gate.logout(&token));
        assert!(gate.authorize(&token).is_none());
        assert!(gate.authorize(&other).is_some());
        assert!(!gate.logout(&token));
    }

    #[test]
    fn unknown_token_is_not_authorized() {
        let gate = AdminGate::new("pw".into());
        assert!(gate.authorize("made-up").is_none());
    }

    #[test]
    fn bearer_token_requires_the_bearer_scheme() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc-123"),
        );
        assert_eq!(bearer_token(&headers), Some("abc-123"));

        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Basic abc-123"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
