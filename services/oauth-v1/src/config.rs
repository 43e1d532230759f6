use crate::constants::*;
use crate::signature::SignatureStrategy;
use oauth_sign_core::utils::Redact;
use oauth_sign_core::Context;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Config carries all the configuration for OAuth 1.0a signing.
///
/// Nothing is validated here. [`RequestSigner::new`](crate::RequestSigner::new)
/// checks the values and applies defaults exactly once.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN`]
    /// - default to empty
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN_SECRET`]
    /// - default to empty
    pub token_secret: Option<String>,
    /// `signature_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_SIGNATURE_METHOD`]
    /// - default to `HMAC-SHA1`
    pub signature_method: Option<String>,
    /// `version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_VERSION`]
    /// - default to `1.0`
    pub version: Option<String>,
    /// Replaces the built-in signature computation.
    ///
    /// Required for any `signature_method` other than `HMAC-SHA1`.
    pub signer_override: Option<Arc<dyn SignatureStrategy>>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("signature_method", &self.signature_method)
            .field("version", &self.version)
            .field("signer_override", &self.signer_override.is_some())
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OAUTH_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_SIGNATURE_METHOD) {
            self.signature_method.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH_VERSION) {
            self.version.get_or_insert(v);
        }

        self
    }

    /// Use `strategy` to compute signatures instead of the built-in method.
    pub fn with_signer_override(mut self, strategy: impl SignatureStrategy) -> Self {
        self.signer_override = Some(Arc::new(strategy));
        self
    }
}
