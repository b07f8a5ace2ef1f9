pub mod csv_source;
pub mod initialize;
pub mod pool;
pub mod provider;
pub mod raw;
pub mod schema;
pub mod snapshot;
pub mod source;
pub mod sqlite;
pub mod stats;

pub use provider::DataProvider;
pub use snapshot::{AgentDirectory, KpiTable, Snapshot};
pub use source::DataSource;
