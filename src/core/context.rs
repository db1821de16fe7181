use std::time::Duration;
use uuid::Uuid;

/// Header carrying the caller's correlation id.
pub const REQUEST_ID_HEADER: &str = "X-REQUEST-ID";
/// Header carrying an optional idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Per-call state passed into every endpoint method.
///
/// Holds the correlation id forwarded as `X-REQUEST-ID`, an optional
/// idempotency key and an optional deadline for the whole call. A default
/// context sends an empty request id and relies on the client-wide timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Option<String>,
    idempotency_key: Option<Uuid>,
    timeout: Option<Duration>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with a freshly generated request id.
    pub fn with_generated_request_id() -> Self {
        Self::new().with_request_id(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_idempotency_key(mut self, key: Uuid) -> Self {
        self.idempotency_key = Some(key);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Request id to send, empty when none was set.
    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or_default()
    }

    pub const fn idempotency_key(&self) -> Option<Uuid> {
        self.idempotency_key
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
