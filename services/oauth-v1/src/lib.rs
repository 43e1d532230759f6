//! OAuth 1.0a signing implementation for oauth-sign.
//!
//! This crate signs outgoing requests following
//! [RFC 5849](https://www.rfc-editor.org/rfc/rfc5849) and attaches the
//! result as an `Authorization: OAuth ...` header.
//!
//! ## Overview
//!
//! For every request the signer:
//!
//! 1. draws a fresh nonce and takes the current unix time,
//! 2. normalizes query parameters, form body parameters and the `oauth_*`
//!    protocol parameters,
//! 3. builds the signature base string from method, base url and parameters,
//! 4. signs it with HMAC-SHA1 (or a custom [`SignatureStrategy`]),
//! 5. writes the `Authorization` header.
//!
//! Tokens are never fetched or refreshed here, the credential must be
//! resolved already.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oauth_sign_core::{Context, OsEnv, Signer};
//! use oauth_sign_v1::{Config, RequestSigner};
//!
//! fn main() -> oauth_sign_core::Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     let config = Config {
//!         consumer_key: Some("your-consumer-key".to_string()),
//!         consumer_secret: Some("your-consumer-secret".to_string()),
//!         ..Default::default()
//!     }
//!     .from_env(&ctx);
//!
//!     let signer = Signer::new(ctx, RequestSigner::new(config)?);
//!
//!     let mut req = http::Request::post("https://api.example.com/1/statuses?include_entities=true")
//!         .header("content-type", "application/x-www-form-urlencoded")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!
//!     signer.sign_parts(&mut req, Some(b"status=hello".as_slice()))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! export OAUTH_CONSUMER_KEY=your-consumer-key
//! export OAUTH_CONSUMER_SECRET=your-consumer-secret
//! export OAUTH_TOKEN=your-token                  # Optional
//! export OAUTH_TOKEN_SECRET=your-token-secret    # Optional
//! export OAUTH_SIGNATURE_METHOD=HMAC-SHA1        # Optional
//! export OAUTH_VERSION=1.0                       # Optional
//! ```
//!
//! ## Custom Signature Methods
//!
//! Only `HMAC-SHA1` is built in. Other methods like `RSA-SHA1` need a
//! [`SignatureStrategy`], which returns the raw signature bytes; base64
//! encoding is done by the signer.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{
    base_string_uri, canonical_parameters, is_form_content_type, percent_encode, string_to_sign,
};

mod nonce;
pub use nonce::{GenerateNonce, RandomNonce, StaticNonce};

mod signature;
pub use signature::{HmacSha1, SignatureStrategy};

mod sign_request;
pub use sign_request::{authorization_header, RequestSigner};
