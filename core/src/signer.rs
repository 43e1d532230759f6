use crate::{BeforeSendEvent, Context, EventKind, Result, SignRequest, SigningRequest, Subscriber};
use http::header::AUTHORIZATION;
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It's cheap to clone and safe to share between threads: the builder is
/// immutable and nothing is kept between two signing calls.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    builder: Arc<dyn SignRequest>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(ctx: Context, builder: impl SignRequest) -> Self {
        Self {
            ctx,
            builder: Arc::new(builder),
        }
    }

    /// Signing request.
    pub fn sign(&self, req: &mut SigningRequest, timestamp: Option<&str>) -> Result<()> {
        self.builder.sign_request(&self.ctx, req, timestamp)
    }

    /// Signing http::request::Parts.
    ///
    /// `form_body` is the raw `application/x-www-form-urlencoded` body if
    /// the request has one. Only the `Authorization` header is written
    /// back, everything else in `parts` stays as is.
    pub fn sign_parts(
        &self,
        parts: &mut http::request::Parts,
        form_body: Option<&[u8]>,
    ) -> Result<()> {
        let mut req = SigningRequest::build(parts)?;
        if let Some(body) = form_body {
            req = req.with_form_body(body);
        }

        self.sign(&mut req, None)?;

        if let Some(value) = req.headers.remove(AUTHORIZATION) {
            parts.headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}

impl Subscriber for Signer {
    fn subscribed_events(&self) -> &'static [EventKind] {
        &[EventKind::BeforeSend]
    }

    fn on_before_send(&self, event: &mut BeforeSendEvent<'_>) -> Result<()> {
        debug!("signing request on {}", EventKind::BeforeSend);
        self.sign(event.request, event.timestamp.as_deref())
    }
}
