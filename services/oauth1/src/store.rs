//! Provider and token records, plus the store contract that supplies them.
//!
//! These are plain data carriers: a [`Provider`] describes one OAuth service
//! (its base URL and the client credentials issued to this application), a
//! [`Token`] associates an authorized end-user session with a provider. The
//! [`TokenStore`] trait is the seam a persistence layer implements;
//! [`MemoryTokenStore`] is the in-process implementation used for tests and
//! single-run tools.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::credential::Credential;
use reqoauth_core::utils::Redact;
use reqoauth_core::{Error, Result};

/// The OAuth protocol version a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderVersion {
    /// OAuth 1.0(a), the version this crate signs for.
    V1,
    /// OAuth 2.0; listed so provider records can carry it, never signed here.
    V2,
}

/// One OAuth provider: a base URL plus the client credentials issued to this
/// application.
#[derive(Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Human-readable provider name, also the key tokens are stored under.
    pub name: String,
    /// Base URL requests for this provider are built against.
    pub base_url: String,
    /// The key issued to this application.
    pub client_key: String,
    /// The secret issued to this application.
    pub client_secret: String,
    /// The protocol version this provider speaks.
    pub version: ProviderVersion,
}

impl Provider {
    /// Create a provider record, defaulting to OAuth 1.0.
    pub fn new(
        name: impl Into<String>,
        client_key: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            client_key: client_key.into(),
            client_secret: client_secret.into(),
            version: ProviderVersion::V1,
        }
    }

    /// Set the protocol version.
    pub fn with_version(mut self, version: ProviderVersion) -> Self {
        self.version = version;
        self
    }

    /// Seed a signing credential from this provider's client pair.
    ///
    /// Only OAuth 1.0 providers can seed an HMAC-SHA1 credential.
    pub fn credential(&self) -> Result<Credential> {
        if self.version != ProviderVersion::V1 {
            return Err(Error::config_invalid(format!(
                "provider {} speaks OAuth 2.0, not signable with HMAC-SHA1",
                self.name
            )));
        }

        Ok(Credential::new(
            self.client_key.clone(),
            self.client_secret.clone(),
        ))
    }
}

impl Debug for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("client_key", &Redact::from(&self.client_key))
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("version", &self.version)
            .finish()
    }
}

/// A token issued by a provider for one authorized end-user session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Name of the provider that issued this token.
    pub provider: String,
    /// The access token.
    pub token: String,
    /// The access token secret.
    pub secret: String,
}

impl Token {
    /// Create a token record.
    pub fn new(
        provider: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("provider", &self.provider)
            .field("token", &Redact::from(&self.token))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

/// The contract a persistence layer implements to associate tokens with
/// providers.
///
/// One token per provider: saving replaces any token previously stored for
/// the same provider.
pub trait TokenStore: Debug + Send + Sync + 'static {
    /// Look up the token stored for a provider, if any.
    fn find_token(&self, provider: &str) -> Option<Token>;

    /// Store a token, replacing the provider's previous one.
    fn save(&self, token: Token);

    /// Remove a stored token.
    fn delete(&self, token: &Token);
}

/// In-process token store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, Token>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn find_token(&self, provider: &str) -> Option<Token> {
        self.tokens
            .lock()
            .expect("lock poisoned")
            .get(provider)
            .cloned()
    }

    fn save(&self, token: Token) {
        self.tokens
            .lock()
            .expect("lock poisoned")
            .insert(token.provider.clone(), token);
    }

    fn delete(&self, token: &Token) {
        self.tokens
            .lock()
            .expect("lock poisoned")
            .remove(&token.provider);
    }
}
