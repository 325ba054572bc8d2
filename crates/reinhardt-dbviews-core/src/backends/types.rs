//! Common type definitions for database abstraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
	Postgres,
	Sqlite,
	Mysql,
}

impl DatabaseType {
	/// Check if this database type supports transactional DDL
	///
	/// Transactional DDL means that DDL statements (CREATE VIEW, DROP VIEW, etc.)
	/// can be rolled back if the transaction fails. A view rebuild is only
	/// atomic on backends that return `true` here.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dbviews_core::backends::types::DatabaseType;
	///
	/// assert!(DatabaseType::Postgres.supports_transactional_ddl());
	/// assert!(DatabaseType::Sqlite.supports_transactional_ddl());
	/// assert!(!DatabaseType::Mysql.supports_transactional_ddl());
	/// ```
	pub fn supports_transactional_ddl(&self) -> bool {
		matches!(self, DatabaseType::Postgres | DatabaseType::Sqlite)
	}

	/// Check if this database type has `CREATE MATERIALIZED VIEW`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dbviews_core::backends::types::DatabaseType;
	///
	/// assert!(DatabaseType::Postgres.supports_materialized_views());
	/// assert!(!DatabaseType::Sqlite.supports_materialized_views());
	/// ```
	pub fn supports_materialized_views(&self) -> bool {
		matches!(self, DatabaseType::Postgres)
	}
}

impl fmt::Display for DatabaseType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DatabaseType::Postgres => write!(f, "PostgreSQL"),
			DatabaseType::Sqlite => write!(f, "SQLite"),
			DatabaseType::Mysql => write!(f, "MySQL"),
		}
	}
}

/// Quote an identifier for the given database type
///
/// - PostgreSQL/SQLite: `"identifier"`
/// - MySQL: `` `identifier` ``
///
/// Embedded quote characters are doubled.
///
/// # Example
///
/// ```rust
/// use reinhardt_dbviews_core::backends::types::{DatabaseType, quote_identifier};
///
/// assert_eq!(quote_identifier("sales", DatabaseType::Postgres), "\"sales\"");
/// assert_eq!(quote_identifier("order", DatabaseType::Mysql), "`order`");
/// ```
pub fn quote_identifier(identifier: &str, database_type: DatabaseType) -> String {
	match database_type {
		DatabaseType::Postgres | DatabaseType::Sqlite => {
			format!("\"{}\"", identifier.replace('"', "\"\""))
		}
		DatabaseType::Mysql => format!("`{}`", identifier.replace('`', "``")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(DatabaseType::Postgres, "my\"view", "\"my\"\"view\"")]
	#[case(DatabaseType::Sqlite, "sales", "\"sales\"")]
	#[case(DatabaseType::Mysql, "we`ird", "`we``ird`")]
	fn test_quote_identifier_escapes(
		#[case] database_type: DatabaseType,
		#[case] input: &str,
		#[case] expected: &str,
	) {
		assert_eq!(quote_identifier(input, database_type), expected);
	}

	#[rstest]
	fn test_database_type_serde_lowercase() {
		let json = serde_json::to_string(&DatabaseType::Postgres).unwrap();
		assert_eq!(json, "\"postgres\"");
		let parsed: DatabaseType = serde_json::from_str("\"sqlite\"").unwrap();
		assert_eq!(parsed, DatabaseType::Sqlite);
	}

	#[rstest]
	fn test_only_postgres_materializes() {
		assert!(DatabaseType::Postgres.supports_materialized_views());
		assert!(!DatabaseType::Sqlite.supports_materialized_views());
		assert!(!DatabaseType::Mysql.supports_materialized_views());
	}
}
