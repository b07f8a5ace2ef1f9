use super::{open_service, renderer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::KpiService;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::dashboard::DashboardRenderer;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::prompt::read_line;

const MENU: &str = "[r] refresh  [l] logout  [q] quit > ";

/// Handle the `login` command.
///
/// Loops until end of input or `q`:
///  - anonymous: ask MIS + password, retry on rejection
///  - authenticated: render the dashboard, then offer refresh / logout / quit
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { mis } = cmd {
        let service = open_service(cfg)?;
        let renderer = renderer(cfg);
        let mut session = Session::new();
        let mut preset_mis = mis.clone();

        'session: loop {
            if !session.is_authenticated() {
                header("🔐 Agent Login");

                let identifier = match preset_mis.take() {
                    Some(m) => m,
                    None => match read_line("Agent MIS: ")? {
                        Some(m) => m,
                        None => break 'session,
                    },
                };
                let Some(secret) = read_line("Password: ")? else {
                    break 'session;
                };

                match service.submit_login(&mut session, &identifier, &secret) {
                    Ok(identity) => {
                        success(format!("Welcome, {}", identity.display_name));
                        show_dashboard(&service, &session, &renderer)?;
                    }
                    Err(e) => {
                        error(e);
                        continue 'session;
                    }
                }
            }

            match read_line(MENU)?.as_deref().map(str::trim) {
                None | Some("q") => break 'session,
                Some("r") => show_dashboard(&service, &session, &renderer)?,
                Some("l") => {
                    session.logout();
                    info("Logged out.");
                }
                Some(other) => warning(format!("Unknown choice: '{other}'")),
            }
        }

        info("Session closed.");
    }

    Ok(())
}

/// Render the dashboard of the logged-in agent. A missing KPI row is shown
/// as a message under the header; the session stays open.
fn show_dashboard(
    service: &KpiService,
    session: &Session,
    renderer: &DashboardRenderer,
) -> AppResult<()> {
    let Some(identity) = session.identity() else {
        return Ok(());
    };

    match service.request_dashboard(session) {
        Ok(view) => print!("{}", renderer.render_dashboard(identity, &view)),
        Err(AppError::Lookup(e)) => {
            print!("{}", renderer.render_header(identity));
            error(e);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
