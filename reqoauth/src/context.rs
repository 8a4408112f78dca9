use reqoauth_core::{Context, OsEnv};
use reqoauth_http_send_reqwest::ReqwestHttpSend;

/// Create a context wired with the default components: a reqwest-backed HTTP
/// transport and the OS environment.
///
/// # Example
///
/// ```no_run
/// use reqoauth::default_context;
/// use reqoauth::oauth1::Consumer;
///
/// let consumer = Consumer::new(default_context());
/// ```
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
