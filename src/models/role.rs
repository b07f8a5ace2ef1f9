use serde::Serialize;
use std::fmt;

/// Value of the `ROLE` column. Only `Agent` may open the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Role {
    Agent,
    Other(String),
}

impl Role {
    /// Convert source string → enum. Matching is exact: "agent" is not an Agent.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "Agent" => Role::Agent,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Agent => "Agent",
            Role::Other(s) => s.as_str(),
        }
    }

    pub fn grants_dashboard(&self) -> bool {
        matches!(self, Role::Agent)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
