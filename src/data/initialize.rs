use super::pool::DbPool;
use super::schema::CREATE_SCHEMA;
use crate::errors::AppResult;
use std::path::Path;

/// Create an empty SQLite data file with both tables.
/// Existing tables are left untouched.
pub fn init_data_file(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let pool = DbPool::open_rw(path)?;
    pool.conn.execute_batch(CREATE_SCHEMA)?;
    Ok(())
}
