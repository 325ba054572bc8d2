//! SQLite schema executor
//!
//! SQLite has plain views but no materialized views; the schema editor rejects
//! materialized view operations before they reach this executor.

use crate::backends::schema::{SchemaEditorError, SchemaEditorResult, SchemaExecutor};
use crate::backends::types::DatabaseType;
use sqlx::SqliteConnection;

/// SQLite-backed [`SchemaExecutor`]
pub struct SqliteExecutor<'c> {
	conn: &'c mut SqliteConnection,
}

impl<'c> SqliteExecutor<'c> {
	/// Wrap a connection or an open transaction
	pub fn new(conn: &'c mut SqliteConnection) -> Self {
		Self { conn }
	}
}

#[async_trait::async_trait]
impl SchemaExecutor for SqliteExecutor<'_> {
	fn database_type(&self) -> DatabaseType {
		DatabaseType::Sqlite
	}

	async fn execute(&mut self, sql: &str) -> SchemaEditorResult<()> {
		if sql.is_empty() {
			return Err(SchemaEditorError::InvalidOperation(
				"Cannot execute empty SQL".to_string(),
			));
		}

		sqlx::query(sql)
			.execute(&mut *self.conn)
			.await
			.map_err(|e| SchemaEditorError::ExecutionError(e.to_string()))?;

		Ok(())
	}
}
