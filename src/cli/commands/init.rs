use crate::cli::parser::Cli;
use crate::config::Config;
use crate::data::initialize::init_data_file;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This prepares:
///  - the config directory and file (skipped with `--test`)
///  - an empty SQLite data file with AGENTDB / KPIDB, unless the data
///    source already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;

    info("Initializing kpiview…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Data source : {}", cfg.data_source);

    let data_path = expand_tilde(&cfg.data_source);
    if data_path.exists() {
        info(format!(
            "Data source already present, left untouched: {}",
            data_path.display()
        ));
    } else {
        init_data_file(&data_path)?;
        success(format!("Empty data file created at {}", data_path.display()));
    }

    success("kpiview initialization completed!");
    Ok(())
}
