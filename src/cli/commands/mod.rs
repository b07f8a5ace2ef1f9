pub mod config;
pub mod data;
pub mod export;
pub mod init;
pub mod login;
pub mod view;

use crate::config::Config;
use crate::core::service::KpiService;
use crate::data::{DataProvider, DataSource};
use crate::errors::{AppError, AppResult};
use crate::ui::dashboard::DashboardRenderer;
use crate::ui::prompt::read_line;

/// Load the configured data source and wrap it in a service.
/// A broken source stops the command here, before any prompt is shown.
pub(crate) fn open_service(cfg: &Config) -> AppResult<KpiService> {
    let provider = DataProvider::new(DataSource::from_path(&cfg.data_source));
    Ok(KpiService::new(provider.load()?))
}

pub(crate) fn renderer(cfg: &Config) -> DashboardRenderer {
    DashboardRenderer::new(&cfg.title, cfg.color, cfg.card_width)
}

/// Password from the command line, or one line of stdin.
pub(crate) fn password_or_prompt(password: Option<&str>) -> AppResult<String> {
    match password {
        Some(p) => Ok(p.to_string()),
        None => read_line("Password: ")?
            .ok_or_else(|| AppError::Other("no password given".into())),
    }
}
