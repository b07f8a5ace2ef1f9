pub mod agent;
pub mod kpi;
pub mod role;
pub mod session;
