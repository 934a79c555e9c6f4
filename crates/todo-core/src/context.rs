//! Request-scoped context passed explicitly through every store call.
//!
//! Carries the trace ID used in log lines and the cancellation token a caller
//! can fire to abandon a queued request.

use tokio_util::sync::CancellationToken;

/// Trace ID plus cancellation signal for one logical operation
/// (one CLI invocation or one HTTP request).
#[derive(Debug, Clone)]
pub struct RequestContext {
    trace_id: String,
    cancel: CancellationToken,
}

impl RequestContext {
    /// New context with a freshly generated trace ID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_trace_id(generate_trace_id())
    }

    /// New context using `trace_id`, or a generated one when it is blank.
    #[must_use]
    pub fn with_trace_id(trace_id: impl Into<String>) -> Self {
        let trace_id = trace_id.into();
        let trace_id = if trace_id.trim().is_empty() {
            generate_trace_id()
        } else {
            trace_id.trim().to_string()
        };
        Self {
            trace_id,
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the cancellation token, e.g. with a child of a server-wide token.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    #[must_use]
    pub const fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Random 16-byte trace ID rendered as 32 lowercase hex chars.
///
/// Falls back to an all-zero ID if the OS entropy source fails.
#[must_use]
pub fn generate_trace_id() -> String {
    let mut bytes = [0u8; 16];
    if getrandom::fill(&mut bytes).is_err() {
        bytes = [0u8; 16];
    }
    hex::encode(bytes)
}
