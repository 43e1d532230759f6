use crate::canonical::{canonical_parameters, percent_encode, request_base_uri, string_to_sign};
use crate::constants::*;
use crate::nonce::{GenerateNonce, RandomNonce};
use crate::signature::{HmacSha1, SignatureStrategy};
use crate::{Config, Credential};
use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;
use oauth_sign_core::hash::base64_encode;
use oauth_sign_core::time::{format_unix_timestamp, now, parse_unix_timestamp, DateTime};
use oauth_sign_core::{Context, Error, Result, SignRequest, SigningCredential, SigningRequest};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// RequestSigner that implements OAuth 1.0a.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://www.rfc-editor.org/rfc/rfc5849)
///
/// The signer is immutable after construction and can be shared between
/// threads to sign any number of requests.
#[derive(Clone)]
pub struct RequestSigner {
    credential: Credential,
    signature_method: String,
    version: String,
    signer_override: Option<Arc<dyn SignatureStrategy>>,
    nonce: Arc<dyn GenerateNonce>,

    time: Option<DateTime>,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credential", &self.credential)
            .field("signature_method", &self.signature_method)
            .field("version", &self.version)
            .field("signer_override", &self.signer_override.is_some())
            .field("nonce", &self.nonce)
            .field("time", &self.time)
            .finish()
    }
}

impl RequestSigner {
    /// Create a new signer from config.
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](oauth_sign_core::ErrorKind::ConfigInvalid)
    /// if consumer key or consumer secret is missing or empty.
    pub fn new(config: Config) -> Result<Self> {
        let credential = Credential {
            consumer_key: config.consumer_key.unwrap_or_default(),
            consumer_secret: config.consumer_secret.unwrap_or_default(),
            token: config.token.unwrap_or_default(),
            token_secret: config.token_secret.unwrap_or_default(),
        };
        if !credential.is_valid() {
            return Err(Error::config_invalid(
                "consumer_key and consumer_secret are required",
            ));
        }

        Ok(Self {
            credential,
            signature_method: config
                .signature_method
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| HMAC_SHA1.to_string()),
            version: config
                .version
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            signer_override: config.signer_override,
            nonce: Arc::new(RandomNonce),
            time: None,
        })
    }

    /// Replace the nonce generator.
    pub fn with_nonce_generator(mut self, nonce: impl GenerateNonce) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Credential used to sign requests.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Signature method announced in `oauth_signature_method`.
    pub fn signature_method(&self) -> &str {
        &self.signature_method
    }

    /// Protocol version announced in `oauth_version`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns true if a custom signature strategy is configured.
    pub fn has_signer_override(&self) -> bool {
        self.signer_override.is_some()
    }

    /// Build the signature base string for `req`.
    ///
    /// A fresh nonce is drawn from the nonce generator.
    pub fn string_to_sign(&self, req: &SigningRequest, timestamp: Option<&str>) -> Result<String> {
        let oauth_params = self.oauth_params(timestamp)?;
        self.build_string_to_sign(req, &oauth_params)
    }

    /// Compute the base64 encoded `oauth_signature` for `req`.
    pub fn signature(&self, req: &SigningRequest, timestamp: Option<&str>) -> Result<String> {
        let string_to_sign = self.string_to_sign(req, timestamp)?;
        self.calculate_signature(&string_to_sign)
    }

    fn timestamp(&self, timestamp: Option<&str>) -> Result<String> {
        match timestamp {
            Some(v) => {
                parse_unix_timestamp(v)?;
                Ok(v.to_string())
            }
            None => Ok(format_unix_timestamp(self.time.unwrap_or_else(now))),
        }
    }

    /// Protocol parameters without `oauth_signature`.
    fn oauth_params(&self, timestamp: Option<&str>) -> Result<BTreeMap<&'static str, String>> {
        let mut params = BTreeMap::new();
        params.insert(PARAM_CONSUMER_KEY, self.credential.consumer_key.clone());
        params.insert(PARAM_NONCE, self.nonce.generate_nonce());
        params.insert(PARAM_SIGNATURE_METHOD, self.signature_method.clone());
        params.insert(PARAM_TIMESTAMP, self.timestamp(timestamp)?);
        if !self.credential.token.is_empty() {
            params.insert(PARAM_TOKEN, self.credential.token.clone());
        }
        params.insert(PARAM_VERSION, self.version.clone());

        Ok(params)
    }

    fn build_string_to_sign(
        &self,
        req: &SigningRequest,
        oauth_params: &BTreeMap<&'static str, String>,
    ) -> Result<String> {
        let base_uri = request_base_uri(req);
        let parameters =
            canonical_parameters(req, oauth_params.iter().map(|(k, v)| (*k, v.as_str())))?;
        debug!("calculated normalized parameters: {parameters}");

        let string_to_sign = string_to_sign(&req.method, &base_uri, &parameters);
        debug!("calculated string to sign: {string_to_sign}");
        Ok(string_to_sign)
    }

    fn calculate_signature(&self, string_to_sign: &str) -> Result<String> {
        let key = self.credential.signing_key();

        let raw = match &self.signer_override {
            Some(strategy) => strategy.sign(string_to_sign, &key)?,
            None if self.signature_method.eq_ignore_ascii_case(HMAC_SHA1) => {
                HmacSha1.sign(string_to_sign, &key)?
            }
            None => {
                return Err(Error::signature_method_unsupported(format!(
                    "signature method {} requires a signer override",
                    self.signature_method
                )))
            }
        };

        Ok(base64_encode(&raw))
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(
        &self,
        _: &Context,
        req: &mut SigningRequest,
        timestamp: Option<&str>,
    ) -> Result<()> {
        let mut oauth_params = self.oauth_params(timestamp)?;
        let string_to_sign = self.build_string_to_sign(req, &oauth_params)?;
        let signature = self.calculate_signature(&string_to_sign)?;
        oauth_params.insert(PARAM_SIGNATURE, signature);

        let mut authorization = HeaderValue::from_str(&authorization_header(
            oauth_params.iter().map(|(k, v)| (*k, v.as_str())),
        ))?;
        authorization.set_sensitive(true);

        req.headers.insert(AUTHORIZATION, authorization);
        Ok(())
    }
}

/// Render the `Authorization` header value.
///
/// ```
/// use oauth_sign_v1::authorization_header;
///
/// assert_eq!(
///     authorization_header([("oauth_version", "1.0"), ("oauth_consumer_key", "a b")]),
///     r#"OAuth oauth_consumer_key="a%20b", oauth_version="1.0""#
/// );
/// ```
pub fn authorization_header<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut encoded: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let pairs = encoded
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>();
    format!("OAuth {}", pairs.join(", "))
}
