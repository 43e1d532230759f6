use oauth_sign_core::hash::hmac_sha1;
use oauth_sign_core::Result;

/// SignatureStrategy computes the raw signature bytes over a base string.
///
/// The caller base64 encodes whatever is returned, implementations must
/// not encode the output themselves.
///
/// Any `Fn(&str, &str) -> Vec<u8>` closure is a strategy:
///
/// ```
/// use oauth_sign_v1::Config;
///
/// let config = Config::default()
///     .with_signer_override(|base: &str, key: &str| format!("_{base}|{key}_").into_bytes());
/// ```
pub trait SignatureStrategy: Send + Sync + 'static {
    /// Sign `base_string` with `key`, which is
    /// `encode(consumer_secret)&encode(token_secret)`.
    fn sign(&self, base_string: &str, key: &str) -> Result<Vec<u8>>;
}

impl<F> SignatureStrategy for F
where
    F: Fn(&str, &str) -> Vec<u8> + Send + Sync + 'static,
{
    fn sign(&self, base_string: &str, key: &str) -> Result<Vec<u8>> {
        Ok(self(base_string, key))
    }
}

/// The `HMAC-SHA1` signature method.
#[derive(Debug, Default, Clone, Copy)]
pub struct HmacSha1;

impl SignatureStrategy for HmacSha1 {
    fn sign(&self, base_string: &str, key: &str) -> Result<Vec<u8>> {
        Ok(hmac_sha1(key.as_bytes(), base_string.as_bytes()))
    }
}
