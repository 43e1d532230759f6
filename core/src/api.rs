use crate::{Context, Result, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Implementations must leave `req` untouched when they return an error.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Sign the request in place.
    ///
    /// ## Timestamp
    ///
    /// The `timestamp` parameter pins the signing time as unix seconds.
    /// Implementations take the current time when it's `None`; only tests
    /// should pass a fixed value.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut SigningRequest,
        timestamp: Option<&str>,
    ) -> Result<()>;
}
