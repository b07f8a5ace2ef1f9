use super::agent::AgentIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(AgentIdentity),
}

/// Per-user authentication state. Owned by whoever drives the interaction
/// and passed explicitly to every dashboard call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&AgentIdentity> {
        match &self.state {
            SessionState::Authenticated(id) => Some(id),
            SessionState::Anonymous => None,
        }
    }

    /// Anonymous → Authenticated. Called only after a successful login.
    pub(crate) fn admit(&mut self, identity: AgentIdentity) {
        self.state = SessionState::Authenticated(identity);
    }

    /// Authenticated → Anonymous.
    pub fn logout(&mut self) {
        self.state = SessionState::Anonymous;
    }
}
