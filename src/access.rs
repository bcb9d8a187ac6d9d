//! Coarse permission and role evaluation against decoded claims.

use serde::{Deserialize, Serialize};

use crate::token::SessionClaims;

/// Wrap-time authorization requirement, shared across every invocation of
/// the guarded loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequirement {
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AccessRequirement {
    #[must_use]
    pub fn new<P, R>(permissions: P, roles: R) -> Self
    where
        P: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        Self {
            permissions: permissions.into_iter().collect(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Whether the decoded claims satisfy this requirement.
    ///
    /// Every required permission must be held. When roles are required,
    /// holding any one of them suffices. An empty requirement is always
    /// satisfied.
    #[must_use]
    pub fn satisfied_by(&self, claims: &SessionClaims) -> bool {
        let has_permissions = self
            .permissions
            .iter()
            .all(|required| claims.permissions.iter().any(|held| held == required));
        if !has_permissions {
            return false;
        }

        if self.roles.is_empty() {
            return true;
        }
        self.roles
            .iter()
            .any(|required| claims.roles.iter().any(|held| held == required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(permissions: &[&str], roles: &[&str]) -> SessionClaims {
        SessionClaims {
            permissions: permissions.iter().map(ToString::to_string).collect(),
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    fn requirement(permissions: &[&str], roles: &[&str]) -> AccessRequirement {
        AccessRequirement::new(
            permissions.iter().map(ToString::to_string),
            roles.iter().map(ToString::to_string),
        )
    }

    #[test]
    fn empty_requirement_is_always_satisfied() {
        let requirement = AccessRequirement::default();
        assert!(requirement.satisfied_by(&SessionClaims::default()));
        assert!(requirement.satisfied_by(&claims(&["metrics.list"], &["editor"])));
    }

    #[test]
    fn every_required_permission_must_be_held() {
        let requirement = requirement(&["metrics.list", "metrics.create"], &[]);
        assert!(requirement.satisfied_by(&claims(&["metrics.list", "metrics.create"], &[])));
        assert!(!requirement.satisfied_by(&claims(&["metrics.list"], &[])));
        assert!(!requirement.satisfied_by(&claims(&[], &[])));
    }

    #[test]
    fn any_required_role_suffices() {
        let requirement = requirement(&[], &["administrator", "editor"]);
        assert!(requirement.satisfied_by(&claims(&[], &["editor"])));
        assert!(requirement.satisfied_by(&claims(&[], &["administrator", "viewer"])));
        assert!(!requirement.satisfied_by(&claims(&[], &["viewer"])));
    }

    #[test]
    fn permissions_gate_before_roles() {
        let requirement = requirement(&["metrics.list"], &["administrator"]);
        assert!(!requirement.satisfied_by(&claims(&[], &["administrator"])));
        assert!(requirement.satisfied_by(&claims(&["metrics.list"], &["administrator"])));
    }
}
