use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of roles the routing layer understands. The database column
/// stays an open string; parsing happens at the repository boundary and an
/// unrecognized value comes back as "no role".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }

    /// Landing page an authenticated user of this role is routed to.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Student => "/student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("student"), Some(Role::Student));
    }

    #[test]
    fn unknown_roles_parse_to_none() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("teacher"), None);
        assert_eq!(Role::parse("Admin"), None);
    }

    #[test]
    fn home_paths_match_route_prefixes() {
        assert_eq!(Role::Admin.home_path(), "/admin");
        assert_eq!(Role::Student.home_path(), "/student");
    }
}
