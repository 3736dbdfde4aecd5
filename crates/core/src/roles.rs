//! The closed set of authorization roles known to the service.
//!
//! Stored role names are the exact constant text (`"ROLE_ADMIN"`, ...), so
//! renaming a variant's string is a data migration, not a refactor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "ROLE_STUDENT";
pub const ROLE_TEACHER: &str = "ROLE_TEACHER";
pub const ROLE_PARENT: &str = "ROLE_PARENT";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A role kind from the compile-time enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    #[serde(rename = "ROLE_STUDENT")]
    Student,
    #[serde(rename = "ROLE_TEACHER")]
    Teacher,
    #[serde(rename = "ROLE_PARENT")]
    Parent,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl RoleKind {
    /// Every role kind, in declaration order. Seeding inserts in this order.
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Student,
        RoleKind::Teacher,
        RoleKind::Parent,
        RoleKind::Admin,
    ];

    /// The name persisted in `roles.name`.
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::Student => ROLE_STUDENT,
            RoleKind::Teacher => ROLE_TEACHER,
            RoleKind::Parent => ROLE_PARENT,
            RoleKind::Admin => ROLE_ADMIN,
        }
    }

    /// Human-readable description stored alongside the role on first seed.
    pub fn description(self) -> &'static str {
        match self {
            RoleKind::Student => "Homework, grades, attendance history and announcements",
            RoleKind::Teacher => "Class management, assignments, attendance marking and grading",
            RoleKind::Parent => "Follows a student's progress and talks to teachers",
            RoleKind::Admin => "School-wide management, analytics and communication oversight",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = CoreError;

    /// Parse a stored role name (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown role '{s}'. Must be one of: {:?}",
                    RoleKind::ALL.map(RoleKind::as_str)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_is_in_declared_order() {
        let names: Vec<_> = RoleKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            ["ROLE_STUDENT", "ROLE_TEACHER", "ROLE_PARENT", "ROLE_ADMIN"]
        );
    }

    #[test]
    fn all_has_no_duplicates() {
        let unique: HashSet<_> = RoleKind::ALL.iter().collect();
        assert_eq!(unique.len(), RoleKind::ALL.len());
    }

    #[test]
    fn parse_known_names() {
        for kind in RoleKind::ALL {
            assert_eq!(kind.as_str().parse::<RoleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_matches!("role_admin".parse::<RoleKind>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "ROLE_LEGACY".parse::<RoleKind>().unwrap_err();
        assert!(err.to_string().contains("ROLE_LEGACY"));
    }

    #[test]
    fn display_matches_stored_name() {
        assert_eq!(RoleKind::Teacher.to_string(), "ROLE_TEACHER");
    }

    #[test]
    fn serde_uses_stored_name() {
        let json = serde_json::to_string(&RoleKind::Parent).unwrap();
        assert_eq!(json, "\"ROLE_PARENT\"");
        let back: RoleKind = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
        assert_eq!(back, RoleKind::Admin);
    }
}
