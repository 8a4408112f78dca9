use crate::{constants::*, Credential};
use async_trait::async_trait;
use reqoauth_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the consumer credential from environment
/// variables.
///
/// This provider looks for the following environment variables:
/// - `REQOAUTH_CONSUMER_KEY`: the consumer key (required)
/// - `REQOAUTH_CONSUMER_SECRET`: the consumer secret (required)
/// - `REQOAUTH_TOKEN`: the access token (optional)
/// - `REQOAUTH_TOKEN_SECRET`: the access token secret (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let consumer_key = envs.get(REQOAUTH_CONSUMER_KEY);
        let consumer_secret = envs.get(REQOAUTH_CONSUMER_SECRET);

        match (consumer_key, consumer_secret) {
            (Some(key), Some(secret)) => Ok(Some(Credential {
                consumer_key: key.clone(),
                consumer_secret: secret.clone(),
                oauth_token: envs.get(REQOAUTH_TOKEN).cloned(),
                oauth_token_secret: envs.get(REQOAUTH_TOKEN_SECRET).cloned(),
            })),
            _ => Ok(None),
        }
    }
}
