/// Env var for the consumer key issued by the provider.
pub const REQOAUTH_CONSUMER_KEY: &str = "REQOAUTH_CONSUMER_KEY";
/// Env var for the consumer secret issued by the provider.
pub const REQOAUTH_CONSUMER_SECRET: &str = "REQOAUTH_CONSUMER_SECRET";
/// Env var for the access token of an authorized end-user session.
pub const REQOAUTH_TOKEN: &str = "REQOAUTH_TOKEN";
/// Env var for the access token secret of an authorized end-user session.
pub const REQOAUTH_TOKEN_SECRET: &str = "REQOAUTH_TOKEN_SECRET";

// Protocol parameter names, per RFC 5849 section 3.1.
pub(crate) const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub(crate) const OAUTH_NONCE: &str = "oauth_nonce";
pub(crate) const OAUTH_SIGNATURE: &str = "oauth_signature";
pub(crate) const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub(crate) const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub(crate) const OAUTH_TOKEN: &str = "oauth_token";
pub(crate) const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
pub(crate) const OAUTH_VERSION: &str = "oauth_version";

// Fixed protocol parameter values.
pub(crate) const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";
pub(crate) const PROTOCOL_VERSION_1_0: &str = "1.0";
