// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{KpiExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON object.
pub(crate) fn export_json(row: &KpiExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(row)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row taken from the serde field names.
pub(crate) fn export_csv(row: &KpiExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.serialize(row)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
