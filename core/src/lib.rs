//! Core components for signing OAuth requests.
//!
//! This crate provides the foundational types and traits for the oauth-sign ecosystem.
//! Service crates like `oauth-sign-v1` build on top of it.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment used to resolve configuration
//! - **SigningRequest**: A view of the request that carries typed query and body parameters
//! - **Traits**: Abstract interfaces for request signing (`SignRequest`) and lifecycle
//!   subscription (`Subscriber`)
//! - **Signer**: The hook that runs a `SignRequest` right before a request is sent
//!
//! ## Example
//!
//! ```
//! use oauth_sign_core::{Context, Result, SignRequest, Signer, SigningRequest};
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut SigningRequest,
//!         _timestamp: Option<&str>,
//!     ) -> Result<()> {
//!         req.headers
//!             .insert(http::header::AUTHORIZATION, "Custom token".parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyBuilder);
//!
//! let mut parts = http::Request::get("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign_parts(&mut parts, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod request;
pub use request::{Params, SigningRequest, Value};

mod api;
pub use api::{SignRequest, SigningCredential};

mod event;
pub use event::{BeforeSendEvent, EventKind, Subscriber};

mod signer;
pub use signer::Signer;
