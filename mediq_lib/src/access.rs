//! Role-based route authorization.

use mediq_api::types::{Identity, Role};
use mediq_api::RequestContext;

use crate::session::SessionResolver;

/// Who a route admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Clinic staff only: admin, doctor, or staff effective role.
    Staff,
    /// Patients only.
    Patient,
    /// The one patient the route is about, and nobody else.
    PatientSelf(i64),
}

/// Where a denied caller is sent. The paths are part of the external
/// contract and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    SignIn,
    StaffHome,
    PatientDetail(i64),
}

impl Redirect {
    pub fn path(&self) -> String {
        match self {
            Redirect::SignIn => "/signin".to_string(),
            Redirect::StaffHome => "/admin".to_string(),
            Redirect::PatientDetail(id) => format!("/patients/{}", id),
        }
    }
}

/// Outcome of guarding a route.
#[derive(Debug)]
pub enum Access {
    Granted(Identity),
    Redirect(Redirect),
}

/// Applies `guard` to an already-resolved identity.
///
/// Pure and deterministic: no I/O, the only outcomes are a grant or a
/// redirect target. Anything ambiguous (no identity, empty role list,
/// unrecognized role) lands on the sign-in redirect. Fail closed.
pub fn enforce(guard: RouteGuard, resolved: Option<Identity>) -> Access {
    let Some(identity) = resolved else {
        return Access::Redirect(Redirect::SignIn);
    };
    // Only the first role counts; further roles are ignored.
    let role = identity.effective_role();
    match guard {
        RouteGuard::Staff => match role {
            Some(r) if r.is_staff() => Access::Granted(identity),
            Some(Role::User) => Access::Redirect(Redirect::PatientDetail(identity.id)),
            _ => Access::Redirect(Redirect::SignIn),
        },
        RouteGuard::Patient => match role {
            Some(Role::User) => Access::Granted(identity),
            Some(r) if r.is_staff() => Access::Redirect(Redirect::StaffHome),
            _ => Access::Redirect(Redirect::SignIn),
        },
        RouteGuard::PatientSelf(patient_id) => match role {
            Some(Role::User) if identity.id == patient_id => Access::Granted(identity),
            // An id mismatch is treated as a security violation, not a
            // wrong-home situation: back to sign-in.
            Some(Role::User) => Access::Redirect(Redirect::SignIn),
            Some(r) if r.is_staff() => Access::Redirect(Redirect::StaffHome),
            _ => Access::Redirect(Redirect::SignIn),
        },
    }
}

/// Resolves and guards in one step, in that order.
///
/// Enforcement always precedes any resource fetch the caller goes on to
/// make, so an unauthorized caller never triggers a backend read of
/// another patient's data.
pub struct Authorizer {
    resolver: SessionResolver,
}

impl Authorizer {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn authorize(&self, guard: RouteGuard, ctx: &RequestContext) -> Access {
        enforce(guard, self.resolver.resolve(ctx).await)
    }
}
