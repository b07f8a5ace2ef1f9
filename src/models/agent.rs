use super::role::Role;
use serde::Serialize;
use std::fmt;

/// Plaintext password as stored in the directory.
/// Compared verbatim; never shown by `Debug`.
///
/// An empty or missing cell leaves the secret unset, and an unset secret
/// matches nothing, not even an empty input.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Option<String>);

impl Secret {
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        Self((!s.is_empty()).then_some(s))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_deref() == Some(candidate)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Secret(***)"),
            None => f.write_str("Secret(unset)"),
        }
    }
}

/// One row of `AGENTDB`.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRecord {
    pub identifier: String,    // ⇔ AGENTMIS
    pub secret: Secret,        // ⇔ PASSWORD
    pub role: Role,            // ⇔ ROLE
    pub display_name: String,  // ⇔ NAME
}

impl AgentRecord {
    pub fn new(identifier: &str, secret: &str, role: &str, display_name: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            secret: Secret::new(secret),
            role: Role::from_db_str(role),
            display_name: display_name.to_string(),
        }
    }

    pub fn identity(&self) -> AgentIdentity {
        AgentIdentity {
            identifier: self.identifier.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// What the presentation layer learns about an agent after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentIdentity {
    pub identifier: String,
    pub display_name: String,
}
