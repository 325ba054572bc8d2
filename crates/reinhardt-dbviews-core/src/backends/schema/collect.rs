//! SQL collection executor
//!
//! [`CollectSqlExecutor`] records statements instead of running them, which is
//! what `sqlmigrate`-style tooling needs to print the DDL a migration would
//! issue.

use crate::backends::schema::{SchemaEditorResult, SchemaExecutor};
use crate::backends::types::DatabaseType;
use async_trait::async_trait;

/// Executor that collects statements without touching a database
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::backends::schema::SchemaExecutor;
/// use reinhardt_dbviews_core::backends::schema::collect::CollectSqlExecutor;
/// use reinhardt_dbviews_core::backends::types::DatabaseType;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut collector = CollectSqlExecutor::new(DatabaseType::Postgres);
/// collector.execute("DROP VIEW \"sales\"").await.unwrap();
/// assert_eq!(collector.statements(), ["DROP VIEW \"sales\""]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CollectSqlExecutor {
	database_type: DatabaseType,
	statements: Vec<String>,
}

impl CollectSqlExecutor {
	/// Create a collector that writes SQL for `database_type`
	pub fn new(database_type: DatabaseType) -> Self {
		Self {
			database_type,
			statements: Vec::new(),
		}
	}

	/// Statements collected so far, in execution order
	pub fn statements(&self) -> &[String] {
		&self.statements
	}

	/// Take the collected statements, leaving the collector empty
	pub fn take_statements(&mut self) -> Vec<String> {
		std::mem::take(&mut self.statements)
	}

	/// Render the collected statements as a script, one statement per line
	pub fn to_script(&self) -> String {
		self.statements
			.iter()
			.map(|sql| format!("{};", sql))
			.collect::<Vec<_>>()
			.join("\n")
	}
}

#[async_trait]
impl SchemaExecutor for CollectSqlExecutor {
	fn database_type(&self) -> DatabaseType {
		self.database_type
	}

	async fn execute(&mut self, sql: &str) -> SchemaEditorResult<()> {
		self.statements.push(sql.to_string());
		Ok(())
	}
}
