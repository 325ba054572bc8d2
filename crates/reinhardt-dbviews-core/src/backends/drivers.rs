//! Database-specific schema executors

#[cfg(feature = "postgres")]
pub mod postgresql;

#[cfg(feature = "sqlite")]
pub mod sqlite;
