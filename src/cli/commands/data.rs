use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::DataSource;
use crate::data::stats::SourceStats;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::formatting::human_size;
use crate::utils::table::Table;

/// Handle the `data` subcommand.
///
/// `--check` fails the command (non-zero exit) when the dashboard would
/// refuse to start on this source.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Data { check, info: show_info } = cmd {
        let source = DataSource::from_path(&cfg.data_source);
        let stats = SourceStats::collect(&source)?;

        if *show_info {
            print_info(&stats);
        }

        if *check {
            return run_check(stats);
        }
    }

    Ok(())
}

fn print_info(stats: &SourceStats) {
    header("Data source");
    println!("• File: {} ({})", stats.path, stats.kind);
    println!("• Size: {}", human_size(stats.size_bytes));
    println!();

    let mut table = Table::new(&["table", "rows", "columns", "missing"]);
    for t in &stats.tables {
        table.add_row(vec![
            t.name.to_string(),
            t.rows.to_string(),
            t.columns.to_string(),
            if t.missing_columns.is_empty() {
                "-".to_string()
            } else {
                t.missing_columns.join(", ")
            },
        ]);
    }
    print!("{}", table.render());
    println!();
}

fn run_check(stats: SourceStats) -> AppResult<()> {
    let findings = stats.findings();

    if let Some(f) = findings {
        if !f.duplicate_kpi_rows.is_empty() {
            warning(format!(
                "Several KPI rows for: {} (the first row is shown)",
                f.duplicate_kpi_rows.join(", ")
            ));
        }
        if !f.kpis_without_agent.is_empty() {
            warning(format!(
                "KPI rows without a directory entry: {}",
                f.kpis_without_agent.join(", ")
            ));
        }
        if !f.agents_without_kpis.is_empty() {
            warning(format!(
                "Agents without KPI data: {}",
                f.agents_without_kpis.join(", ")
            ));
        }
        if !f.agents_without_password.is_empty() {
            warning(format!(
                "Agents without a password (cannot log in): {}",
                f.agents_without_password.join(", ")
            ));
        }
        if f.non_agent_roles > 0 {
            info(format!(
                "{} directory row(s) have a role other than Agent and cannot log in",
                f.non_agent_roles
            ));
        }
    }

    match stats.load {
        Ok(snap) => {
            success(format!(
                "Data source is valid: {} agent(s), {} KPI row(s)",
                snap.directory.len(),
                snap.kpis.len()
            ));
            Ok(())
        }
        Err(e) => {
            error("Data source is not usable:");
            Err(e.into())
        }
    }
}
