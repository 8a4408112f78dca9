//! The OAuth 1.0a consumer: signs a request description and dispatches it.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;

use super::constants::*;
use super::credential::Credential;
use super::sign_request::{
    merge_params, normalized_param_string, oauth_protocol_params, sign, signature_base_string,
    signing_key, RequestSigner,
};
use reqoauth_core::{Context, Error, ProvideCredential, Result, SigningCredential};

/// An OAuth 1.0a consumer bound to one logical identity.
///
/// A `Consumer` owns its credential. `send` takes `&mut self` because request
/// parameters may carry a fresh token pair that is absorbed into the
/// credential; the borrow rules therefore enforce at most one in-flight
/// request per consumer. For concurrent identities, construct one `Consumer`
/// per OAuth session.
///
/// ## Example
///
/// ```no_run
/// use http::Method;
/// use reqoauth_core::Context;
/// use reqoauth_oauth1::Consumer;
///
/// # async fn example(ctx: Context) -> reqoauth_core::Result<()> {
/// let mut consumer = Consumer::new(ctx);
/// consumer
///     .set_consumer_key("CK")?
///     .set_consumer_secret("CS")?;
///
/// let resp = consumer
///     .send(
///         "https://api.example.com/resource",
///         &[("foo", "bar")],
///         Method::GET,
///     )
///     .await?;
/// assert!(resp.status().is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Consumer {
    ctx: Context,
    credential: Credential,
    signer: RequestSigner,
}

impl Consumer {
    /// Create a consumer with no credential configured yet.
    ///
    /// Configure the consumer key/secret with [`Consumer::set_consumer_key`]
    /// and [`Consumer::set_consumer_secret`] before calling
    /// [`Consumer::send`].
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            credential: Credential::default(),
            signer: RequestSigner::new(),
        }
    }

    /// Create a consumer from an existing credential.
    pub fn with_credential(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            signer: RequestSigner::new(),
        }
    }

    /// Create a consumer seeded from a credential provider.
    ///
    /// A provider that yields nothing leaves the consumer uninitialized;
    /// `send` will refuse to dispatch until the setters are used.
    pub async fn from_provider(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let credential = provider
            .provide_credential(&ctx)
            .await?
            .unwrap_or_default();

        Ok(Self::with_credential(ctx, credential))
    }

    #[cfg(test)]
    pub(crate) fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Set the consumer key.
    pub fn set_consumer_key(&mut self, key: impl Into<String>) -> Result<&mut Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::credential_invalid(
                "the consumer key must be a non-empty string",
            ));
        }

        self.credential.consumer_key = key;
        Ok(self)
    }

    /// Set the consumer secret.
    pub fn set_consumer_secret(&mut self, secret: impl Into<String>) -> Result<&mut Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::credential_invalid(
                "the consumer secret must be a non-empty string",
            ));
        }

        self.credential.consumer_secret = secret;
        Ok(self)
    }

    /// Set the access token of an authorized end-user session.
    pub fn set_oauth_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.credential.oauth_token = Some(token.into());
        self
    }

    /// Set the access token secret of an authorized end-user session.
    pub fn set_oauth_token_secret(&mut self, secret: impl Into<String>) -> &mut Self {
        self.credential.oauth_token_secret = Some(secret.into());
        self
    }

    /// The access token currently in use, if any.
    pub fn oauth_token(&self) -> Option<&str> {
        self.credential.oauth_token.as_deref()
    }

    /// The access token secret currently in use, if any.
    pub fn oauth_token_secret(&self) -> Option<&str> {
        self.credential.oauth_token_secret.as_deref()
    }

    /// True iff the consumer key and secret are both set.
    ///
    /// This is the precondition gate for [`Consumer::send`].
    pub fn is_initialized(&self) -> bool {
        self.credential.is_valid()
    }

    /// The oauth_* protocol parameters for one request: a fresh nonce and
    /// timestamp plus the credential-derived values, empty entries filtered.
    pub fn oauth_protocol_params(&self) -> Vec<(String, String)> {
        oauth_protocol_params(
            &self.credential,
            &self.signer.timestamp(),
            &self.signer.fresh_nonce(),
        )
    }

    /// Sign and dispatch a request against `base_url`.
    ///
    /// For GET the signed parameter set is appended to `base_url` as the
    /// query string; for every other method `base_url` is used unchanged and
    /// the parameter set becomes the form-encoded request body.
    ///
    /// The transport's response is returned unmodified; transport errors
    /// propagate untouched, retry policy is the caller's concern.
    pub async fn send(
        &mut self,
        base_url: &str,
        params: &[(&str, &str)],
        method: Method,
    ) -> Result<http::Response<Bytes>> {
        if !self.is_initialized() {
            return Err(Error::credential_uninitialized(
                "the consumer key and secret must be set first",
            ));
        }

        let mut params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.absorb_params(&mut params);

        let timestamp = self.signer.timestamp();
        let nonce = self.signer.fresh_nonce();
        let mut params = merge_params(
            oauth_protocol_params(&self.credential, &timestamp, &nonce),
            &params,
        );

        let base_string = signature_base_string(&method, base_url, &params);
        log::debug!("signature base string: {base_string}");

        let signature = sign(
            &base_string,
            &signing_key(
                &self.credential.consumer_secret,
                self.credential.oauth_token_secret.as_deref(),
            ),
        );
        params.push((OAUTH_SIGNATURE.to_string(), signature));

        let payload = normalized_param_string(&params);
        let req = if method == Method::GET {
            http::Request::builder()
                .method(method)
                .uri(format!("{base_url}?{payload}"))
                .body(Bytes::new())?
        } else {
            http::Request::builder()
                .method(method)
                .uri(base_url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Bytes::from(payload))?
        };

        self.ctx.http_send(req).await
    }

    /// Absorb a token pair travelling in the caller-supplied parameters.
    ///
    /// `oauth_token` is kept in the outgoing set; `oauth_token_secret` is
    /// removed and survives only as HMAC key material on the credential.
    /// Absorbing the same values twice is a no-op.
    fn absorb_params(&mut self, params: &mut Vec<(String, String)>) {
        let (token, token_secret) = super::sign_request::extract_token_params(params);
        if token.is_some() {
            self.credential.oauth_token = token;
        }
        if token_secret.is_some() {
            self.credential.oauth_token_secret = token_secret;
        }
    }
}
