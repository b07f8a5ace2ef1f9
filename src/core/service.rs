//! Login + dashboard operations over a shared snapshot.
//!
//! The service never stores a session: the caller owns it and passes it in,
//! so one snapshot can serve any number of independent sessions.

use super::{auth, resolver};
use crate::data::Snapshot;
use crate::errors::{AppResult, AuthError};
use crate::models::agent::AgentIdentity;
use crate::models::kpi::KpiView;
use crate::models::session::Session;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct KpiService {
    snapshot: Arc<Snapshot>,
}

impl KpiService {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }

    /// Check credentials and, on success, mark `session` authenticated.
    /// A failed attempt leaves the session as it was.
    pub fn submit_login(
        &self,
        session: &mut Session,
        identifier: &str,
        secret: &str,
    ) -> Result<AgentIdentity, AuthError> {
        match auth::authenticate(&self.snapshot.directory, identifier, secret) {
            Ok(identity) => {
                info!(identifier, "login accepted");
                session.admit(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                info!(identifier, "login rejected");
                Err(e)
            }
        }
    }

    /// KPI view for the agent logged into `session`.
    pub fn request_dashboard(&self, session: &Session) -> AppResult<KpiView> {
        let identity = session.identity().ok_or(AuthError::NotAuthenticated)?;
        let view = resolver::resolve(&identity.identifier, &self.snapshot.kpis).inspect_err(|_| {
            info!(identifier = %identity.identifier, "no KPI row for agent");
        })?;
        Ok(view)
    }
}
