use crate::data::AgentDirectory;
use crate::errors::AuthError;
use crate::models::agent::AgentIdentity;
use tracing::debug;

/// Decide admission for an identifier/password pair.
///
/// A row matches when its identifier and password equal the input exactly
/// (no trimming, case-sensitive) and its role is `Agent`. The first match
/// wins. Every other outcome is the same `InvalidCredentials`, so callers
/// cannot tell an unknown MIS from a wrong password.
pub fn authenticate(
    directory: &AgentDirectory,
    identifier: &str,
    secret: &str,
) -> Result<AgentIdentity, AuthError> {
    let found = directory.iter().find(|a| {
        a.identifier == identifier && a.secret.matches(secret) && a.role.grants_dashboard()
    });

    match found {
        Some(agent) => {
            debug!(identifier, "credentials accepted");
            Ok(agent.identity())
        }
        None => Err(AuthError::InvalidCredentials),
    }
}
