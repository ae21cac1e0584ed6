//! Session resolution against the upstream identity endpoint.

use mediq_api::types::Identity;
use mediq_api::{Client, Error, RequestContext};

use crate::error::MediqError;

/// Why a resolution did not produce an identity.
///
/// The public contract folds all of these into `None`; the tagged form keeps
/// timeout, auth rejection and upstream faults distinguishable for logging
/// and tests without changing external behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveFailure {
    /// The upstream rejected the session (401/403) or returned no user record.
    Unauthenticated,
    /// The upstream answered with some other non-success status.
    Upstream(u16),
    /// The identity call timed out.
    Timeout,
    /// The identity call never reached the upstream.
    Network,
    /// The response body was not a usable identity envelope.
    Malformed,
}

/// Pass-through resolver for the caller's identity.
///
/// Holds no session store: every call forwards the context's cookie to the
/// identity endpoint and reports what came back. No caching across calls.
pub struct SessionResolver {
    api: Client,
}

impl SessionResolver {
    pub fn new(api: Client) -> Self {
        Self { api }
    }

    /// Resolves the caller's identity, folding every failure to `None`.
    ///
    /// One upstream call, no retries: a failure means "not authenticated",
    /// and the next navigation re-resolves anyway.
    pub async fn resolve(&self, ctx: &RequestContext) -> Option<Identity> {
        self.resolve_detailed(ctx).await.ok()
    }

    /// Resolution with the failure kind preserved.
    pub async fn resolve_detailed(
        &self,
        ctx: &RequestContext,
    ) -> Result<Identity, ResolveFailure> {
        match self.api.current_identity(ctx).await {
            Ok(envelope) => match envelope.data {
                Some(identity) => Ok(identity),
                None => {
                    tracing::debug!("Identity endpoint returned no user record");
                    Err(ResolveFailure::Unauthenticated)
                }
            },
            Err(Error::HttpStatus { status, .. }) if status == 401 || status == 403 => {
                tracing::debug!("Identity endpoint rejected session with status {}", status);
                Err(ResolveFailure::Unauthenticated)
            }
            Err(Error::HttpStatus { status, .. }) => {
                tracing::debug!("Identity endpoint returned status {}", status);
                Err(ResolveFailure::Upstream(status))
            }
            Err(Error::Timeout) => Err(ResolveFailure::Timeout),
            Err(Error::Decode) => Err(ResolveFailure::Malformed),
            Err(_) => Err(ResolveFailure::Network),
        }
    }

    /// Logs in and returns a context carrying the new session cookie.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RequestContext, MediqError> {
        let token = self.api.login(username, password).await?;
        Ok(RequestContext::with_session(token))
    }

    /// Logs out upstream. A 204 confirms the session is gone, and only then
    /// is the context's token cleared; later `resolve` calls return `None`.
    pub async fn logout(&self, ctx: &mut RequestContext) -> Result<(), MediqError> {
        if self.api.logout(ctx).await? {
            ctx.clear_session();
        }
        Ok(())
    }
}
