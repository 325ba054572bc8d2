//! PostgreSQL schema executor
//!
//! Runs view DDL on a borrowed connection. Borrowing the connection instead of
//! a pool keeps the drop and the recreate of a rebuild on the same session, so
//! both statements land in the caller's transaction.
//!
//! # Example
//!
//! ```no_run
//! use reinhardt_dbviews_core::backends::drivers::postgresql::PostgresExecutor;
//! use reinhardt_dbviews_core::backends::schema::SchemaExecutor;
//! use sqlx::PgPool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgresql://localhost/mydb").await?;
//! let mut tx = pool.begin().await?;
//! {
//!     let mut executor = PostgresExecutor::new(&mut *tx);
//!     executor.execute("REFRESH MATERIALIZED VIEW \"sales\"").await?;
//! }
//! tx.commit().await?;
//! # Ok(())
//! # }
//! ```

use crate::backends::schema::{SchemaEditorError, SchemaEditorResult, SchemaExecutor};
use crate::backends::types::DatabaseType;
use sqlx::PgConnection;

/// PostgreSQL-backed [`SchemaExecutor`]
pub struct PostgresExecutor<'c> {
	conn: &'c mut PgConnection,
}

impl<'c> PostgresExecutor<'c> {
	/// Wrap a connection or an open transaction
	pub fn new(conn: &'c mut PgConnection) -> Self {
		Self { conn }
	}
}

#[async_trait::async_trait]
impl SchemaExecutor for PostgresExecutor<'_> {
	fn database_type(&self) -> DatabaseType {
		DatabaseType::Postgres
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
