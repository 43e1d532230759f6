//! Request lifecycle events that signers subscribe to.

use std::fmt;

use crate::{Result, SigningRequest};

/// EventKind names a point in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Fired exactly once right before the request is transmitted.
    BeforeSend,
}

impl EventKind {
    /// Stable name of this event, like `request.before_send`.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::BeforeSend => "request.before_send",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of [`EventKind::BeforeSend`].
#[derive(Debug)]
pub struct BeforeSendEvent<'a> {
    /// The request about to be sent.
    pub request: &'a mut SigningRequest,
    /// Optional unix timestamp override in seconds.
    pub timestamp: Option<String>,
}

impl<'a> BeforeSendEvent<'a> {
    /// Create a new event for `request`.
    pub fn new(request: &'a mut SigningRequest) -> Self {
        Self {
            request,
            timestamp: None,
        }
    }

    /// Pin the timestamp used by subscribers.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Subscriber is the registration contract between an HTTP client and
/// the components that act on its lifecycle events.
pub trait Subscriber: Send + Sync {
    /// Events this subscriber wants to receive.
    fn subscribed_events(&self) -> &'static [EventKind];

    /// Handle [`EventKind::BeforeSend`].
    fn on_before_send(&self, event: &mut BeforeSendEvent<'_>) -> Result<()>;
}
