use crate::{Config, Credential};
use async_trait::async_trait;
use reqoauth_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider loads the consumer credential from a [`Config`].
///
/// Fields missing from the config are filled from the environment before the
/// credential is built, so an explicit consumer key can be combined with a
/// secret injected via env var.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl From<Config> for ConfigCredentialProvider {
    fn from(config: Config) -> Self {
        Self::new(Arc::new(config))
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        match (&config.consumer_key, &config.consumer_secret) {
            (Some(key), Some(secret)) => Ok(Some(Credential {
                consumer_key: key.clone(),
                consumer_secret: secret.clone(),
                oauth_token: config.oauth_token.clone(),
                oauth_token_secret: config.oauth_token_secret.clone(),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use reqoauth_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_config_credential_provider() -> Result<()> {
        let config = Config::new()
            .with_consumer_key("CK")
            .with_consumer_secret("CS");
        let provider = ConfigCredentialProvider::from(config);

        let cred = provider.provide_credential(&Context::new()).await?.unwrap();
        assert_eq!(cred.consumer_key, "CK");
        assert_eq!(cred.consumer_secret, "CS");

        Ok(())
    }

    #[tokio::test]
    async fn test_config_credential_provider_fills_from_env() -> Result<()> {
        let envs = HashMap::from([(REQOAUTH_CONSUMER_SECRET.to_string(), "env_cs".to_string())]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let config = Config::new().with_consumer_key("CK");
        let provider = ConfigCredentialProvider::from(config);

        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.consumer_key, "CK");
        assert_eq!(cred.consumer_secret, "env_cs");

        Ok(())
    }

    #[tokio::test]
    async fn test_config_credential_provider_incomplete() -> Result<()> {
        let config = Config::new().with_consumer_key("CK");
        let provider = ConfigCredentialProvider::from(config);

        let cred = provider.provide_credential(&Context::new()).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
