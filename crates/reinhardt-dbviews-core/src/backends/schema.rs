//! Schema executor abstraction
//!
//! [`SchemaExecutor`] is the seam between the view schema editor and a live
//! database connection. The editor only ever generates SQL text and hands it
//! to `execute`, one statement at a time, in order.

pub mod collect;
pub mod test_utils;

use super::types::{DatabaseType, quote_identifier};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while executing schema statements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaEditorError {
	#[error("Invalid operation: {0}")]
	InvalidOperation(String),

	#[error("Execution error: {0}")]
	ExecutionError(String),
}

pub type SchemaEditorResult<T> = Result<T, SchemaEditorError>;

/// Executes DDL on behalf of the schema editor
///
/// Implementations run every statement on the same connection they were built
/// with. Transaction boundaries belong to the caller.
#[async_trait]
pub trait SchemaExecutor: Send {
	/// Backend the statements are written for
	fn database_type(&self) -> DatabaseType;

	/// Quote a table or view name for this backend
	fn quote_name(&self, name: &str) -> String {
		quote_identifier(name, self.database_type())
	}

	/// Execute a single SQL statement
	async fn execute(&mut self, sql: &str) -> SchemaEditorResult<()>;
}

#[async_trait]
impl<E> SchemaExecutor for &mut E
where
	E: SchemaExecutor + ?Sized,
{
	fn database_type(&self) -> DatabaseType {
		(**self).database_type()
	}

	fn quote_name(&self, name: &str) -> String {
		(**self).quote_name(name)
	}

	async fn execute(&mut self, sql: &str) -> SchemaEditorResult<()> {
		(**self).execute(sql).await
	}
}
