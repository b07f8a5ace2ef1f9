use super::{open_service, password_or_prompt};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::session::Session;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        mis,
        password,
        format,
        file,
        force,
    } = cmd
    {
        let service = open_service(cfg)?;
        let secret = password_or_prompt(password.as_deref())?;

        let mut session = Session::new();
        let identity = service.submit_login(&mut session, mis, &secret)?;
        let view = service.request_dashboard(&session)?;

        ExportLogic::export(&identity, &view, *format, file, *force)?;
    }
    Ok(())
}
