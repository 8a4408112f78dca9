use reqoauth_core::utils::Redact;
use reqoauth_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that identifies an OAuth 1.0a consumer, optionally acting on
/// behalf of an authorized end-user.
#[derive(Default, Clone)]
pub struct Credential {
    /// The key issued to the consumer (application) by the provider.
    pub consumer_key: String,
    /// The secret issued to the consumer (application) by the provider.
    pub consumer_secret: String,
    /// Token identifying an authorized end-user session, if any.
    pub oauth_token: Option<String>,
    /// Secret validating `oauth_token`.
    ///
    /// Never transmitted; used only as HMAC key material.
    pub oauth_token_secret: Option<String>,
}

impl Credential {
    /// Create a new credential from a consumer key/secret pair.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            oauth_token: None,
            oauth_token_secret: None,
        }
    }

    /// Attach an access token/secret pair for an authorized end-user.
    pub fn with_token(mut self, token: impl Into<String>, secret: impl Into<String>) -> Self {
        self.oauth_token = Some(token.into());
        self.oauth_token_secret = Some(secret.into());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("oauth_token", &Redact::from(&self.oauth_token))
            .field("oauth_token_secret", &Redact::from(&self.oauth_token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_requires_both_consumer_fields() {
        assert!(!Credential::default().is_valid());
        assert!(!Credential::new("key", "").is_valid());
        assert!(!Credential::new("", "secret").is_valid());
        assert!(Credential::new("key", "secret").is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred =
            Credential::new("consumer-key-0123456789", "consumer-secret-0123456789").with_token(
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
                "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
            );

        let repr = format!("{cred:?}");
        assert!(!repr.contains("consumer-secret-0123456789"));
        assert!(!repr.contains("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"));
    }
}
