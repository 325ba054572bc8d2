//! Test utilities for schema editor testing
//!
//! This module provides a mock executor for testing view operations without
//! requiring actual database connections.

use crate::backends::schema::{SchemaEditorError, SchemaEditorResult, SchemaExecutor};
use crate::backends::types::DatabaseType;
use async_trait::async_trait;

/// Mock schema executor for testing
///
/// Records every statement it receives. A failure can be scheduled for the
/// n-th statement (zero-based) or for the first statement containing a
/// pattern; the failing statement is still recorded.
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::backends::schema::test_utils::MockSchemaExecutor;
/// use reinhardt_dbviews_core::backends::schema::SchemaExecutor;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut executor = MockSchemaExecutor::new().fail_on_statement(1, "relation exists");
/// assert!(executor.execute("DROP VIEW \"v\"").await.is_ok());
/// assert!(executor.execute("CREATE VIEW \"v\" AS SELECT 1").await.is_err());
/// assert_eq!(executor.executed().len(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockSchemaExecutor {
	database_type: DatabaseType,
	executed: Vec<String>,
	fail_at: Option<(usize, String)>,
	fail_matching: Option<(String, String)>,
}

impl MockSchemaExecutor {
	/// Create a new PostgreSQL-flavoured mock executor
	pub fn new() -> Self {
		Self::with_database_type(DatabaseType::Postgres)
	}

	/// Create a mock executor for the given backend
	pub fn with_database_type(database_type: DatabaseType) -> Self {
		Self {
			database_type,
			executed: Vec::new(),
			fail_at: None,
			fail_matching: None,
		}
	}

	/// Fail the statement at `index` with an execution error
	pub fn fail_on_statement(mut self, index: usize, message: impl Into<String>) -> Self {
		self.fail_at = Some((index, message.into()));
		self
	}

	/// Fail the first statement containing `pattern`
	pub fn fail_when_contains(
		mut self,
		pattern: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		self.fail_matching = Some((pattern.into(), message.into()));
		self
	}

	/// Statements received so far, in order
	pub fn executed(&self) -> &[String] {
		&self.executed
	}
}

impl Default for MockSchemaExecutor {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SchemaExecutor for MockSchemaExecutor {
	fn database_type(&self) -> DatabaseType {
		self.database_type
	}

	async fn execute(&mut self, sql: &str) -> SchemaEditorResult<()> {
		let index = self.executed.len();
		self.executed.push(sql.to_string());

		if let Some((at, message)) = &self.fail_at {
			if *at == index {
				return Err(SchemaEditorError::ExecutionError(message.clone()));
			}
		}

		let matched = matches!(&self.fail_matching, Some((pattern, _)) if sql.contains(pattern.as_str()));
		if matched {
			if let Some((_, message)) = self.fail_matching.take() {
				return Err(SchemaEditorError::ExecutionError(message));
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_mock_schema_executor_creation() {
		let executor = MockSchemaExecutor::new();
		assert_eq!(executor.database_type(), DatabaseType::Postgres);
		assert!(executor.executed().is_empty());
	}

	#[rstest]
	fn test_mock_schema_executor_default() {
		let executor = MockSchemaExecutor::default();
		assert_eq!(executor.database_type(), DatabaseType::Postgres);
	}

	#[rstest]
	#[tokio::test]
	async fn test_fail_when_contains_fires_once() {
		let mut executor =
			MockSchemaExecutor::with_database_type(DatabaseType::Sqlite).fail_when_contains("CREATE", "boom");

		assert!(executor.execute("DROP VIEW \"v\"").await.is_ok());
		let err = executor.execute("CREATE VIEW \"v\" AS SELECT 1").await.unwrap_err();
		assert_eq!(err, SchemaEditorError::ExecutionError("boom".to_string()));
		assert!(executor.execute("CREATE VIEW \"v\" AS SELECT 1").await.is_ok());
		assert_eq!(executor.executed().len(), 3);
	}
}
