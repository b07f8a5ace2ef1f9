// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportCell, export_row, get_headers};
use crate::export::{KpiExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Single-row scorecard sheet with a styled header and auto-sized columns.
pub(crate) fn export_xlsx(row: &KpiExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("KPI").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    // ---------------------------
    // Values
    // ---------------------------
    let base = Format::new()
        .set_background_color(Color::RGB(0xEAF3FB))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let count_fmt = base.clone().set_align(FormatAlign::Right).set_num_format("0");
    let number_fmt = base.clone().set_align(FormatAlign::Right).set_num_format("0.00");
    let percent_fmt = base.clone().set_align(FormatAlign::Right).set_num_format("0%");

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (col, cell) in export_row(row).into_iter().enumerate() {
        let c = col as u16;
        let shown = match cell {
            ExportCell::Text(s) => {
                worksheet.write_with_format(1, c, s, &base).map_err(to_app_error)?;
                s.to_string()
            }
            ExportCell::Count(n) => {
                worksheet
                    .write_with_format(1, c, n as f64, &count_fmt)
                    .map_err(to_app_error)?;
                n.to_string()
            }
            ExportCell::Number(n) => {
                worksheet
                    .write_with_format(1, c, n, &number_fmt)
                    .map_err(to_app_error)?;
                format!("{n:.2}")
            }
            ExportCell::Percent(r) => {
                worksheet
                    .write_with_format(1, c, r, &percent_fmt)
                    .map_err(to_app_error)?;
                format!("{:.0}%", r * 100.0)
            }
        };
        col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(shown.as_str()));
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
