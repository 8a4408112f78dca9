use crate::Credential;
use async_trait::async_trait;
use reqoauth_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed consumer key/secret pair.
///
/// This provider is used when you have the consumer key and secret directly
/// and want to use them without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    consumer_key: String,
    consumer_secret: String,
    token: Option<(String, String)>,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with a consumer key and secret.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            token: None,
        }
    }

    /// Set the access token/secret pair.
    pub fn with_token(mut self, token: &str, secret: &str) -> Self {
        self.token = Some((token.to_string(), secret.to_string()));
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let mut cred = Credential::new(self.consumer_key.clone(), self.consumer_secret.clone());
        if let Some((token, secret)) = &self.token {
            cred = cred.with_token(token.clone(), secret.clone());
        }

        Ok(Some(cred))
    }
}
