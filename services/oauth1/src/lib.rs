//! OAuth 1.0a signing implementation for reqoauth.
//!
//! This crate implements the OAuth 1.0a consumer side of [RFC 5849]: it
//! normalizes request parameters, builds the signature base string, computes
//! the HMAC-SHA1 `oauth_signature`, and assembles the authorized request.
//!
//! ## Overview
//!
//! Two entry points are provided:
//!
//! - [`Consumer`] owns a credential and a transport-bearing context; its
//!   `send` signs a request description and dispatches it in one call.
//! - [`RequestSigner`] implements the core `SignRequest` trait so existing
//!   `http::Request`s can be signed in place through a
//!   [`Signer`](reqoauth_core::Signer).
//!
//! ## Quick Start
//!
//! ```no_run
//! use http::Method;
//! use reqoauth_core::{Context, Result};
//! use reqoauth_http_send_reqwest::ReqwestHttpSend;
//! use reqoauth_oauth1::Consumer;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Create context
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!
//!     // Configure the consumer
//!     let mut consumer = Consumer::new(ctx);
//!     consumer
//!         .set_consumer_key("your-consumer-key")?
//!         .set_consumer_secret("your-consumer-secret")?;
//!
//!     // Sign and dispatch requests
//!     let resp = consumer
//!         .send(
//!             "https://platform.api.example.com/rest/server.api",
//!             &[("method", "profile.get")],
//!             Method::GET,
//!         )
//!         .await?;
//!     println!("{}", resp.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export REQOAUTH_CONSUMER_KEY=your-consumer-key
//! export REQOAUTH_CONSUMER_SECRET=your-consumer-secret
//! export REQOAUTH_TOKEN=your-access-token        # Optional
//! export REQOAUTH_TOKEN_SECRET=your-token-secret # Optional
//! ```
//!
//! ### Token Store
//!
//! Provider and token records managed by an external collaborator can seed
//! the credential through [`TokenStoreCredentialProvider`]:
//!
//! ```no_run
//! use std::sync::Arc;
//! use reqoauth_oauth1::{MemoryTokenStore, Provider, Token, TokenStore, TokenStoreCredentialProvider};
//!
//! let store = Arc::new(MemoryTokenStore::new());
//! store.save(Token::new("fatsecret", "access-token", "token-secret"));
//!
//! let provider = Provider::new(
//!     "fatsecret",
//!     "client-key",
//!     "client-secret",
//!     "https://platform.api.example.com",
//! );
//! let loader = TokenStoreCredentialProvider::new(provider, store);
//! ```
//!
//! [RFC 5849]: https://tools.ietf.org/html/rfc5849

mod constants;
pub use constants::{
    REQOAUTH_CONSUMER_KEY, REQOAUTH_CONSUMER_SECRET, REQOAUTH_TOKEN, REQOAUTH_TOKEN_SECRET,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod consumer;
pub use consumer::Consumer;

mod store;
pub use store::{MemoryTokenStore, Provider, ProviderVersion, Token, TokenStore};

mod provide_credential;
pub use provide_credential::*;
