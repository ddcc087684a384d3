//! Session context: token issue/verify plus the storage and clock seams.
//!
//! A token is `base64url(claims_json) + "." + base64url(sha256(body || secret))`.
//! The mount-time guard trusts a stored token only after the tag verifies and
//! the expiry is in the future; anything else is cleared. Cookie presence
//! alone is never enough.

use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Cookie / storage key for the session token.
pub const TOKEN_KEY: &str = "auth-token";

/// Sessions live 30 days from issue.
pub fn token_ttl() -> Duration {
    Duration::days(30)
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Where the signed token lives between visits: browser cookie on web, a
/// JSON file on native, memory in tests.
pub trait TokenStore: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str, expires_at: DateTime<Utc>);
    fn clear(&self);
}

/// In-memory store for tests and headless use.
#[derive(Default)]
pub struct MemoryTokenStore(Mutex<Option<String>>);

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }

    fn write(&self, token: &str, _expires_at: DateTime<Utc>) {
        *self.0.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.lock().unwrap() = None;
    }
}

/// What the token asserts: who, until when, and (federated path) the
/// provider-issued refresh token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub subject: String,
    /// Unix seconds.
    pub expires_at: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub refresh_token: Option<String>,
}

impl SessionClaims {
    pub fn encode(&self, secret: &str) -> String {
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(self).expect("serialize claims"));
        let sig = integrity_tag(&body, secret);
        format!("{}.{}", body, sig)
    }

    /// Decode and verify the integrity tag. Expiry is the session's job.
    pub fn decode(token: &str, secret: &str) -> Option<Self> {
        let (body, sig) = token.split_once('.')?;
        if integrity_tag(body, secret) != sig {
            return None;
        }
        let bytes = URL_SAFE_NO_PAD.decode(body).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn expiry(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.expires_at, 0).unwrap_or_default()
    }
}

fn integrity_tag(body: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    hasher.update(secret.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Explicit session context passed to the screens that need it. Store and
/// clock are injected so the guard and the 30-day expiry are testable.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
    secret: String,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store) && Arc::ptr_eq(&self.clock, &other.clock)
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, clock: Arc<dyn Clock>, secret: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            secret: secret.into(),
        }
    }

    /// Issue and persist a token for the password path.
    pub fn open(&self, subject: &str) -> SessionClaims {
        self.open_claims(subject, None)
    }

    /// Issue and persist a token carrying the provider refresh token.
    pub fn open_federated(&self, refresh_token: &str) -> SessionClaims {
        self.open_claims("federated", Some(refresh_token.to_string()))
    }

    fn open_claims(&self, subject: &str, refresh_token: Option<String>) -> SessionClaims {
        let expires_at = self.clock.now() + token_ttl();
        let claims = SessionClaims {
            subject: subject.to_string(),
            expires_at: expires_at.timestamp(),
            refresh_token,
        };
        self.store.write(&claims.encode(&self.secret), expires_at);
        log::info!("session opened for '{}' until {}", claims.subject, expires_at);
        claims
    }

    /// Mount-time guard: the stored token counts only if its tag verifies and
    /// it has not expired. A stale or tampered token is cleared.
    pub fn current(&self) -> Option<SessionClaims> {
        let raw = self.store.read()?;
        match SessionClaims::decode(&raw, &self.secret) {
            Some(claims) if claims.expiry() > self.clock.now() => Some(claims),
            _ => {
                log::info!("stored session token invalid or expired, clearing");
                self.store.clear();
                None
            }
        }
    }

    pub fn close(&self) {
        self.store.clear();
    }
}
