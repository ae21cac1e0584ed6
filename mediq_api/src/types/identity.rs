use serde::{Deserialize, Serialize};

/// Roles known to the clinic API.
///
/// Any role string outside this set deserializes as [`Role::Unknown`], which
/// satisfies no access predicate. New upstream roles therefore fail closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
    Doctor,
    Staff,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// True for the clinic-side roles (admin, doctor, staff).
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Doctor | Role::Staff)
    }
}

/// The authenticated caller as reported by the identity endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Identity {
    /// The role access decisions are made against.
    ///
    /// Only the first role is consulted; any further roles are ignored.
    /// An empty role list yields `None` and fails every predicate.
    pub fn effective_role(&self) -> Option<Role> {
        self.roles.first().copied()
    }
}
