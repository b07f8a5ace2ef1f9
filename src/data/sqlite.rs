//! SQLite backend: one file holding the `AGENTDB` and `KPIDB` tables.

use super::pool::DbPool;
use super::raw::{Cell, RawTable};
use crate::errors::DataSourceError;
use std::path::Path;

pub fn read_tables(path: &Path, names: [&str; 2]) -> Result<[RawTable; 2], DataSourceError> {
    let pool = DbPool::open_read_only(path)?;
    // Opening is lazy in SQLite; a non-database file only fails on first query.
    pool.conn
        .query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
        .map_err(|e| DataSourceError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok([read_table(&pool, names[0])?, read_table(&pool, names[1])?])
}

fn read_table(pool: &DbPool, name: &str) -> Result<RawTable, DataSourceError> {
    if !pool.table_exists(name)? {
        return Err(DataSourceError::MissingTable(name.to_string()));
    }

    // Table name comes from the fixed schema constants, never from user input.
    let mut stmt = pool.conn.prepare(&format!("SELECT * FROM \"{name}\" ORDER BY rowid"))?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = columns.len();

    let mut table = RawTable::new(name, columns);
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(width);
        for i in 0..width {
            cells.push(Cell::from_sql(row.get_ref(i)?));
        }
        table.rows.push(cells);
    }

    Ok(table)
}
