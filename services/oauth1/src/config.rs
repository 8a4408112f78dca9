use std::fmt::{Debug, Formatter};

use super::constants::*;
use reqoauth_core::{utils::Redact, Context};

/// Config carries all the configuration for the OAuth 1.0a consumer.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQOAUTH_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQOAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `oauth_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQOAUTH_TOKEN`]
    pub oauth_token: Option<String>,
    /// `oauth_token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQOAUTH_TOKEN_SECRET`]
    pub oauth_token_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set oauth_token
    pub fn with_oauth_token(mut self, oauth_token: impl Into<String>) -> Self {
        self.oauth_token = Some(oauth_token.into());
        self
    }

    /// Set oauth_token_secret
    pub fn with_oauth_token_secret(mut self, oauth_token_secret: impl Into<String>) -> Self {
        self.oauth_token_secret = Some(oauth_token_secret.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(REQOAUTH_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQOAUTH_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQOAUTH_TOKEN) {
            self.oauth_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQOAUTH_TOKEN_SECRET) {
            self.oauth_token_secret.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("oauth_token", &self.oauth_token.as_ref().map(Redact::from))
            .field(
                "oauth_token_secret",
                &self.oauth_token_secret.as_ref().map(Redact::from),
            )
            .finish()
    }
}
