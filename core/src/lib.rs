//! Core components for signing OAuth 1.0a requests.
//!
//! This crate provides the foundational types and traits for the reqoauth
//! ecosystem. It defines the abstractions that keep the OAuth 1.0a consumer
//! decoupled from credential sources and from the HTTP transport.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: a container holding the injected HTTP transport and
//!   environment access
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and request signing ([`SignRequest`])
//! - **Signer**: the orchestrator that coordinates credential loading and
//!   request signing
//!
//! ## Example
//!
//! ```no_run
//! use reqoauth_core::{Context, Signer, ProvideCredential, SignRequest, SigningCredential, Result};
//! use async_trait::async_trait;
//! use std::time::Duration;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-consumer-key".to_string(),
//!             secret: "my-consumer-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement request builder
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _req: &mut http::request::Parts,
//!         _cred: Option<&Self::Credential>,
//!         _expires_in: Option<Duration>,
//!     ) -> Result<()> {
//!         // Build your signing request here
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! // Create a context with your implementations
//! let ctx = Context::new();
//!
//! // Create a signer
//! let signer = Signer::new(ctx, MyLoader, MyBuilder);
//!
//! // Sign your requests
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: for dispatching HTTP requests
//! - [`Env`]: for environment variable access
//! - [`ProvideCredential`]: for loading credentials from various sources
//! - [`SignRequest`]: for building protocol-specific signing requests
//! - [`SigningCredential`]: for validating credentials

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};

mod request;
pub use request::SigningRequest;

mod signer;
pub use signer::Signer;
