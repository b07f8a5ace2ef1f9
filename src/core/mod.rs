pub mod auth;
pub mod resolver;
pub mod service;
