//! CSV backend: a directory with `AGENTDB.csv` and `KPIDB.csv`.

use super::raw::{Cell, RawTable};
use crate::errors::DataSourceError;
use std::path::Path;

pub fn read_tables(dir: &Path, names: [&str; 2]) -> Result<[RawTable; 2], DataSourceError> {
    if !dir.is_dir() {
        return Err(DataSourceError::Missing(dir.display().to_string()));
    }
    Ok([read_table(dir, names[0])?, read_table(dir, names[1])?])
}

pub fn table_file(dir: &Path, name: &str) -> std::path::PathBuf {
    dir.join(format!("{name}.csv"))
}

fn read_table(dir: &Path, name: &str) -> Result<RawTable, DataSourceError> {
    let path = table_file(dir, name);
    if !path.exists() {
        return Err(DataSourceError::MissingTable(name.to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(&path)?;
    let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut table = RawTable::new(name, columns);
    for record in rdr.records() {
        let record = record?;
        table
            .rows
            .push(record.iter().map(|f| Cell::Text(f.to_string())).collect());
    }

    Ok(table)
}
