use super::{open_service, password_or_prompt, renderer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::agent::AgentIdentity;
use crate::models::kpi::KpiRecord;
use crate::models::session::Session;
use serde::Serialize;

#[derive(Serialize)]
struct JsonDashboard<'a> {
    agent: &'a AgentIdentity,
    kpi: &'a KpiRecord,
}

/// Handle the `view` command: one login, one render.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        mis,
        password,
        json,
    } = cmd
    {
        let service = open_service(cfg)?;
        let secret = password_or_prompt(password.as_deref())?;

        let mut session = Session::new();
        let identity = service.submit_login(&mut session, mis, &secret)?;
        let view = service.request_dashboard(&session)?;

        if *json {
            let out = JsonDashboard {
                agent: &identity,
                kpi: view.record(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            print!("{}", renderer(cfg).render_dashboard(&identity, &view));
        }
    }

    Ok(())
}
