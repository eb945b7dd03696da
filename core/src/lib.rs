pub mod config;
pub mod customer;
pub mod desk;
pub mod error;
pub mod format;
pub mod metrics;
pub mod milestone;
pub mod seed;
pub mod store;
pub mod types;
