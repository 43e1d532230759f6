use oauth_sign_core::hash::hex_encode;
use rand::RngCore;
use std::fmt::Debug;

/// GenerateNonce produces the `oauth_nonce` of every signed request.
pub trait GenerateNonce: Debug + Send + Sync + 'static {
    /// Return a token that is unique with high probability.
    fn generate_nonce(&self) -> String;
}

/// RandomNonce is the default nonce generator.
///
/// It reads 20 bytes from the thread local CSPRNG and renders them as
/// 40 lowercase hex characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl GenerateNonce for RandomNonce {
    fn generate_nonce(&self) -> String {
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex_encode(&bytes)
    }
}

/// StaticNonce always returns the same nonce.
///
/// # Note
///
/// A fixed nonce defeats replay protection. Only use this for testing.
#[derive(Debug, Clone)]
pub struct StaticNonce(String);

impl StaticNonce {
    /// Create a generator that always returns `nonce`.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl GenerateNonce for StaticNonce {
    fn generate_nonce(&self) -> String {
        self.0.clone()
    }
}
