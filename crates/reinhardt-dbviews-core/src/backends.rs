//! Database backend abstractions for view DDL
//!
//! - [`SchemaExecutor`]: runs generated DDL on a caller-owned connection
//! - [`DatabaseType`]: the dialect the DDL and SELECT bodies are written for
//! - [`CollectSqlExecutor`]: records statements instead of running them
//!
//! Concrete executors backed by `sqlx` live in [`drivers`] behind the
//! `postgres` and `sqlite` features.

pub mod drivers;
pub mod schema;
pub mod types;

pub use schema::collect::CollectSqlExecutor;
pub use schema::{SchemaEditorError, SchemaEditorResult, SchemaExecutor};
pub use types::{DatabaseType, quote_identifier};

#[cfg(feature = "postgres")]
pub use drivers::postgresql::PostgresExecutor;

#[cfg(feature = "sqlite")]
pub use drivers::sqlite::SqliteExecutor;
