//! OAuth 1.0a HMAC-SHA1 request signing.

use std::mem;
use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::{distributions::Alphanumeric, Rng};

use super::constants::*;
use super::credential::Credential;
use reqoauth_core::hash::base64_hmac_sha1;
use reqoauth_core::time::{format_unix_timestamp, now, DateTime};
use reqoauth_core::{Context, Error, Result, SignRequest, SigningCredential, SigningRequest};

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// A fresh random value, unique per request to prevent replay.
pub(crate) fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// The oauth_* protocol parameters for a single request.
///
/// Empty values are filtered out, so an unset token contributes nothing.
pub(crate) fn oauth_protocol_params(
    cred: &Credential,
    timestamp: &str,
    nonce: &str,
) -> Vec<(String, String)> {
    let mut params = vec![
        (OAUTH_CONSUMER_KEY, cred.consumer_key.as_str()),
        (OAUTH_SIGNATURE_METHOD, SIGNATURE_METHOD_HMAC_SHA1),
        (OAUTH_TIMESTAMP, timestamp),
        (OAUTH_NONCE, nonce),
        (OAUTH_VERSION, PROTOCOL_VERSION_1_0),
    ];
    if let Some(token) = cred.oauth_token.as_deref() {
        params.push((OAUTH_TOKEN, token));
    }

    params
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Merge protocol parameters under caller-supplied ones.
///
/// Caller parameters win on key collision.
pub(crate) fn merge_params(
    protocol: Vec<(String, String)>,
    caller: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = protocol
        .into_iter()
        .filter(|(k, _)| !caller.iter().any(|(ck, _)| ck == k))
        .collect();
    merged.extend_from_slice(caller);
    merged
}

/// Pull the token pair out of caller-supplied parameters.
///
/// `oauth_token` stays in the outgoing set; `oauth_token_secret` is removed
/// entirely. The secret is HMAC key material and must never reach the wire.
pub(crate) fn extract_token_params(
    params: &mut Vec<(String, String)>,
) -> (Option<String>, Option<String>) {
    let token = params
        .iter()
        .find(|(k, _)| k == OAUTH_TOKEN)
        .map(|(_, v)| v.clone());
    let secret = params
        .iter()
        .find(|(k, _)| k == OAUTH_TOKEN_SECRET)
        .map(|(_, v)| v.clone());
    if secret.is_some() {
        params.retain(|(k, _)| k != OAUTH_TOKEN_SECRET);
    }

    (token, secret)
}

/// Encode parameters, sort them byte-lexicographically, and join them as
/// `key=value` pairs.
///
/// The signature base string and the outgoing query/body both use this
/// normalized form.
pub(crate) fn normalized_param_string(params: &[(String, String)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// METHOD & enc(base_url) & enc(normalized parameters)
/// ```
///
/// ## Reference
///
/// - [RFC 5849, section 3.4.1](https://tools.ietf.org/html/rfc5849#section-3.4.1)
pub(crate) fn signature_base_string(
    method: &Method,
    base_url: &str,
    params: &[(String, String)],
) -> String {
    format!(
        "{}&{}&{}",
        percent_encode(&method.as_str().to_ascii_uppercase()),
        percent_encode(base_url),
        percent_encode(&normalized_param_string(params)),
    )
}

/// Build the HMAC-SHA1 signing key.
///
/// Both components are percent-encoded before concatenation, per RFC 5849
/// section 3.4.2.
pub(crate) fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or(""))
    )
}

/// Compute the base64-encoded HMAC-SHA1 signature over the base string.
pub(crate) fn sign(base_string: &str, key: &str) -> String {
    base64_hmac_sha1(key.as_bytes(), base_string.as_bytes())
}

/// RequestSigner that implements OAuth 1.0a HMAC-SHA1 authorization.
///
/// Signing rewrites the request's query string: the oauth_* protocol
/// parameters and the computed `oauth_signature` are merged with the
/// existing query, sorted, and encoded per RFC 5849.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://tools.ietf.org/html/rfc5849)
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Nonces must be unique per request in production.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub(crate) fn timestamp(&self) -> String {
        format_unix_timestamp(self.time.unwrap_or_else(now))
    }

    pub(crate) fn fresh_nonce(&self) -> String {
        self.nonce.clone().unwrap_or_else(generate_nonce)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "OAuth 1.0 signatures have no expiration; expires_in is not supported",
            ));
        }

        let cred = credential.filter(|c| c.is_valid()).ok_or_else(|| {
            Error::credential_uninitialized("the consumer key and secret must be set first")
        })?;

        let mut req = SigningRequest::build(parts)?;
        let mut caller = mem::take(&mut req.query);

        // A token pair travelling in the query is applied for this request;
        // the secret leaves the parameter set here and never returns.
        let mut cred = cred.clone();
        let (token, token_secret) = extract_token_params(&mut caller);
        if token.is_some() {
            cred.oauth_token = token;
        }
        if token_secret.is_some() {
            cred.oauth_token_secret = token_secret;
        }

        let timestamp = self.timestamp();
        let nonce = self.fresh_nonce();
        let mut params = merge_params(oauth_protocol_params(&cred, &timestamp, &nonce), &caller);

        let base_string = signature_base_string(&req.method, &req.base_uri(), &params);
        log::debug!("signature base string: {base_string}");

        let signature = sign(
            &base_string,
            &signing_key(&cred.consumer_secret, cred.oauth_token_secret.as_deref()),
        );
        params.push((OAUTH_SIGNATURE.to_string(), signature));

        // The rewritten query is fully encoded; apply joins the pairs verbatim.
        let mut pairs: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        pairs.sort();
        req.query = pairs;

        req.apply(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn owned(params: &[(&str, &str)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_percent_encode_keeps_unreserved_only() {
        assert_eq!(percent_encode("abcXYZ019-._~"), "abcXYZ019-._~");
        assert_eq!(
            percent_encode("Hello Ladies + Gentlemen, a signed OAuth request!"),
            "Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21"
        );
        assert_eq!(percent_encode("a=b&c"), "a%3Db%26c");
    }

    #[test]
    fn test_normalized_param_string_sorts_lexicographically() {
        let params = owned(&[("b", "2"), ("a", "1"), ("oauth_nonce", "X")]);
        assert_eq!(normalized_param_string(&params), "a=1&b=2&oauth_nonce=X");
    }

    #[test]
    fn test_merge_params_caller_wins() {
        let protocol = owned(&[("oauth_version", "1.0"), ("oauth_timestamp", "1")]);
        let caller = owned(&[("oauth_timestamp", "999"), ("foo", "bar")]);

        let merged = merge_params(protocol, &caller);
        assert_eq!(
            merged,
            owned(&[
                ("oauth_version", "1.0"),
                ("oauth_timestamp", "999"),
                ("foo", "bar")
            ])
        );
    }

    #[test]
    fn test_extract_token_params_removes_secret_only() {
        let mut params = owned(&[
            ("foo", "bar"),
            ("oauth_token", "tok"),
            ("oauth_token_secret", "shh"),
        ]);

        let (token, secret) = extract_token_params(&mut params);
        assert_eq!(token.as_deref(), Some("tok"));
        assert_eq!(secret.as_deref(), Some("shh"));
        assert_eq!(params, owned(&[("foo", "bar"), ("oauth_token", "tok")]));
    }

    #[test]
    fn test_oauth_protocol_params_filters_empty() {
        let cred = Credential::new("CK", "CS");
        let params = oauth_protocol_params(&cred, "1318622958", "nonce");
        assert!(params.iter().all(|(_, v)| !v.is_empty()));
        assert!(!params.iter().any(|(k, _)| k == OAUTH_TOKEN));

        let cred = Credential::new("CK", "CS").with_token("tok", "shh");
        let params = oauth_protocol_params(&cred, "1318622958", "nonce");
        assert!(params
            .iter()
            .any(|(k, v)| k == OAUTH_TOKEN && v == "tok"));
        assert!(!params.iter().any(|(k, _)| k == OAUTH_TOKEN_SECRET));
    }

    #[test]
    fn test_signing_key_encodes_reserved_characters() {
        // RFC 5849 section 3.4.2: each component is encoded before
        // concatenation.
        assert_eq!(signing_key("se=cret", Some("tok en")), "se%3Dcret&tok%20en");
        assert_eq!(signing_key("CS", None), "CS&");
    }

    /// Worked example from the Twitter API documentation
    /// ("Creating a signature").
    #[test]
    fn test_reference_signature() {
        let cred = Credential::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        )
        .with_token(
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        );
        let caller = owned(&[
            ("include_entities", "true"),
            (
                "status",
                "Hello Ladies + Gentlemen, a signed OAuth request!",
            ),
        ]);

        let params = merge_params(
            oauth_protocol_params(
                &cred,
                "1318622958",
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
            ),
            &caller,
        );
        let base_string = signature_base_string(
            &Method::POST,
            "https://api.twitter.com/1.1/statuses/update.json",
            &params,
        );
        let signature = sign(
            &base_string,
            &signing_key(
                &cred.consumer_secret,
                cred.oauth_token_secret.as_deref(),
            ),
        );

        assert_eq!(signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[tokio::test]
    async fn test_sign_request_get_appends_sorted_query() {
        let _ = env_logger::builder().is_test(true).try_init();

        let signer = RequestSigner::new()
            .with_time(Utc.timestamp_opt(1318622958, 0).unwrap())
            .with_nonce("abcdefgh12345678");
        let cred = Credential::new("CK", "CS");

        let req = http::Request::get("https://api.example.com/resource?foo=bar")
            .body(Bytes::new())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        signer
            .sign_request(&Context::new(), &mut parts, Some(&cred), None)
            .await
            .unwrap();

        assert_eq!(
            parts.uri.to_string(),
            "https://api.example.com/resource?\
             foo=bar\
             &oauth_consumer_key=CK\
             &oauth_nonce=abcdefgh12345678\
             &oauth_signature=VaTGBtpIw4ffK5h6MaZywigtWDM%3D\
             &oauth_signature_method=HMAC-SHA1\
             &oauth_timestamp=1318622958\
             &oauth_version=1.0"
        );
    }

    #[tokio::test]
    async fn test_sign_request_absorbs_token_pair_from_query() {
        let signer = RequestSigner::new()
            .with_time(Utc.timestamp_opt(1318622958, 0).unwrap())
            .with_nonce("abcdefgh12345678");
        let cred = Credential::new("CK", "CS");

        let req = http::Request::get(
            "https://api.example.com/resource?foo=bar&oauth_token=request-token-123&oauth_token_secret=token-secret-456",
        )
        .body(Bytes::new())
        .unwrap();
        let (mut parts, _) = req.into_parts();

        signer
            .sign_request(&Context::new(), &mut parts, Some(&cred), None)
            .await
            .unwrap();

        let uri = parts.uri.to_string();
        assert!(!uri.contains("oauth_token_secret"));
        assert!(!uri.contains("token-secret-456"));
        assert_eq!(
            uri,
            "https://api.example.com/resource?\
             foo=bar\
             &oauth_consumer_key=CK\
             &oauth_nonce=abcdefgh12345678\
             &oauth_signature=WTgSxPlfq1Kf9k6JM61hRDxG46Y%3D\
             &oauth_signature_method=HMAC-SHA1\
             &oauth_timestamp=1318622958\
             &oauth_token=request-token-123\
             &oauth_version=1.0"
        );
    }

    #[tokio::test]
    async fn test_sign_request_rejects_expires_in() {
        let signer = RequestSigner::new();
        let cred = Credential::new("CK", "CS");

        let req = http::Request::get("https://api.example.com/resource")
            .body(Bytes::new())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let err = signer
            .sign_request(
                &Context::new(),
                &mut parts,
                Some(&cred),
                Some(Duration::from_secs(60)),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), reqoauth_core::ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_requires_initialized_credential() {
        let signer = RequestSigner::new();

        let req = http::Request::get("https://api.example.com/resource")
            .body(Bytes::new())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let err = signer
            .sign_request(&Context::new(), &mut parts, None, None)
            .await
            .unwrap_err();
        assert_eq!(
            err.kind(),
            reqoauth_core::ErrorKind::CredentialUninitialized
        );

        let half = Credential::new("CK", "");
        let err = signer
            .sign_request(&Context::new(), &mut parts, Some(&half), None)
            .await
            .unwrap_err();
        assert_eq!(
            err.kind(),
            reqoauth_core::ErrorKind::CredentialUninitialized
        );
    }
}
