use crate::canonical::percent_encode;
use oauth_sign_core::utils::Redact;
use oauth_sign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the consumer and token pairs.
#[derive(Default, Clone)]
pub struct Credential {
    /// Consumer key identifying the client application.
    pub consumer_key: String,
    /// Consumer secret of the client application.
    pub consumer_secret: String,
    /// Token identifying the resource owner, empty when not authorized yet.
    pub token: String,
    /// Token secret, empty when there is no token.
    pub token_secret: String,
}

impl Credential {
    /// Signing key: `encode(consumer_secret)&encode(token_secret)`.
    ///
    /// The `&` is always present, even if token secret is empty.
    pub fn signing_key(&self) -> String {
        format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.token_secret)
        )
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}
