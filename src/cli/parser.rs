use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kpiview
#[derive(Parser)]
#[command(
    name = "kpiview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Agent KPI dashboard: log in with your MIS and review your scorecard",
    long_about = None
)]
pub struct Cli {
    /// Override the data source (SQLite file or directory of CSV files)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty data file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Inspect the data source
    Data {
        #[arg(long = "check", help = "Validate tables, columns and values")]
        check: bool,

        #[arg(long = "info", help = "Show data source information")]
        info: bool,
    },

    /// Interactive session: log in, view the dashboard, log out
    Login {
        /// Agent MIS (asked interactively when omitted)
        #[arg(long = "mis")]
        mis: Option<String>,
    },

    /// Log in and print the dashboard once
    View {
        #[arg(long = "mis", help = "Agent MIS")]
        mis: String,

        #[arg(long = "password", help = "Password (read from stdin when omitted)")]
        password: Option<String>,

        #[arg(long = "json", help = "Print the KPI record as JSON")]
        json: bool,
    },

    /// Export your scorecard to a file
    Export {
        #[arg(long = "mis", help = "Agent MIS")]
        mis: String,

        #[arg(long = "password", help = "Password (read from stdin when omitted)")]
        password: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },
}
