// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::KpiExport;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::models::agent::AgentIdentity;
use crate::models::kpi::KpiView;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

/// High-level export of one agent's scorecard.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `view` to `file` in `format`. Relative paths resolve against
    /// the current directory.
    pub fn export(
        identity: &AgentIdentity,
        view: &KpiView,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_output(file)?;

        ensure_writable(&path, force)?;

        let row = KpiExport::new(identity, view, Local::now().to_rfc3339());

        match format {
            ExportFormat::Csv => export_csv(&row, &path)?,
            ExportFormat::Json => export_json(&row, &path)?,
            ExportFormat::Xlsx => export_xlsx(&row, &path)?,
        }

        info!(
            identifier = %identity.identifier,
            format = format.as_str(),
            path = %path.display(),
            "scorecard exported"
        );
        Ok(path)
    }
}

fn resolve_output(file: &str) -> AppResult<PathBuf> {
    let p = Path::new(file);
    if p.is_absolute() {
        Ok(p.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(p))
    }
}
