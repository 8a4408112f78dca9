use crate::{Credential, Provider, TokenStore};
use async_trait::async_trait;
use reqoauth_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// TokenStoreCredentialProvider seeds a credential from a provider record and
/// the token store.
///
/// The provider record supplies the consumer key/secret pair; if the store
/// holds a token for this provider, the credential also carries the end-user
/// token/secret pair.
#[derive(Debug)]
pub struct TokenStoreCredentialProvider {
    provider: Provider,
    store: Arc<dyn TokenStore>,
}

impl TokenStoreCredentialProvider {
    /// Create a new TokenStoreCredentialProvider.
    pub fn new(provider: Provider, store: Arc<dyn TokenStore>) -> Self {
        Self { provider, store }
    }
}

#[async_trait]
impl ProvideCredential for TokenStoreCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let mut cred = self.provider.credential()?;

        if let Some(token) = self.store.find_token(&self.provider.name) {
            cred.oauth_token = Some(token.token);
            cred.oauth_token_secret = Some(token.secret);
        }

        Ok(Some(cred))
    }
}
