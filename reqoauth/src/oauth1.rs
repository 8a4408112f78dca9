//! OAuth 1.0a service support with convenience APIs
//!
//! This module provides the OAuth 1.0a signing functionality along with
//! convenience functions for common use cases.

// Re-export all OAuth 1.0a signing types
pub use reqoauth_oauth1::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default OAuth 1.0a Signer type with commonly used components
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default OAuth 1.0a signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (reqwest HTTP client, OS environment)
/// - Default credential provider (reads from env vars)
/// - The OAuth 1.0a request signer
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> reqoauth_core::Result<()> {
/// let signer = reqoauth::oauth1::default_signer();
///
/// // Sign a request
/// let mut req = http::Request::builder()
///     .method("GET")
///     .uri("https://platform.api.example.com/rest/server.api?method=profile.get")
///     .body(())
///     .unwrap()
///     .into_parts()
///     .0;
///
/// signer.sign(&mut req, None).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}

/// Create a consumer wired to the default context and credential chain.
///
/// A chain that yields nothing leaves the consumer uninitialized; configure
/// it with the setters before sending.
#[cfg(feature = "default-context")]
pub async fn default_consumer() -> reqoauth_core::Result<Consumer> {
    Consumer::from_provider(default_context(), DefaultCredentialProvider::new()).await
}
