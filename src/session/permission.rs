//! Ownership and role-based visibility checks.
//!
//! These checks drive what the UI shows; they are not an access-control
//! boundary. The API must still enforce authorization on every request.

use super::{admin::AdminInterpreter, error::Error, field::ID_FIELD, store::Session, value::loose_eq};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use tracing::debug;

/// Role required to see a resource.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Anyone, authenticated or not.
    Public,
    /// The authenticated user whose `id` matches the resource owner.
    Owner,
    /// The owner, or any authenticated admin.
    OwnerOrAdmin,
    /// Any authenticated admin.
    Admin,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Public, Self::Owner, Self::OwnerOrAdmin, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Owner => "owner",
            Self::OwnerOrAdmin => "owner_or_admin",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// True when `user_id` matches the session's `id` attribute by value.
///
/// A missing or `null` id never matches.
#[must_use]
pub fn is_owner(session: &Session, user_id: &Value) -> bool {
    session
        .attribute(ID_FIELD)
        .is_some_and(|id| loose_eq(id, user_id))
}

/// Evaluate `role` for the current session.
///
/// Every role except `Public` requires an authenticated session; the check
/// short-circuits so ownership and admin lookups never run against an empty
/// session.
#[must_use]
pub fn is_permitted(
    session: &Session,
    admin: &AdminInterpreter,
    role: Role,
    user_id: &Value,
) -> bool {
    let permitted = match role {
        Role::Public => true,
        Role::Owner => session.is_authenticated() && is_owner(session, user_id),
        Role::OwnerOrAdmin => {
            session.is_authenticated() && (admin.is_admin(session) || is_owner(session, user_id))
        }
        Role::Admin => session.is_authenticated() && admin.is_admin(session),
    };
    debug!(%role, permitted, "permission evaluated");
    permitted
}

/// Like [`is_permitted`], for a role name that has not been parsed yet.
/// Unknown roles are denied.
#[must_use]
pub fn is_permitted_str(
    session: &Session,
    admin: &AdminInterpreter,
    role: &str,
    user_id: &Value,
) -> bool {
    match role.parse::<Role>() {
        Ok(role) => is_permitted(session, admin, role, user_id),
        Err(err) => {
            debug!("{err}, denying");
            false
        }
    }
}
