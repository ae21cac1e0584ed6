//! Per-request forwarding context.

/// Name of the httpOnly session cookie issued by the identity endpoint.
pub(crate) const SESSION_COOKIE: &str = "sid";

/// The inbound request's session cookie, passed explicitly into every call.
///
/// There is no ambient or process-global session state: each resolver or
/// fetcher call receives the context it should forward, request-scoped.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    session: Option<String>,
}

impl RequestContext {
    /// A context with no session cookie (unauthenticated caller).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context forwarding the given session token.
    pub fn with_session(token: impl Into<String>) -> Self {
        Self {
            session: Some(token.into()),
        }
    }

    /// The raw session token, if any.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Drops the session token. Called after the upstream confirms logout.
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// The `Cookie` header value to forward upstream, if a session exists.
    pub(crate) fn cookie_header(&self) -> Option<String> {
        self.session
            .as_deref()
            .map(|token| format!("{SESSION_COOKIE}={token}"))
    }
}
