//! Error types for view schema operations

use crate::backends::schema::SchemaEditorError;
use crate::backends::types::DatabaseType;
use thiserror::Error;

/// A base entity reference that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedReference {
	#[error("View '{entity}' does not declare a base entity")]
	Missing { entity: String },

	#[error("Invalid base entity reference '{reference}': expected 'app_label.ModelName'")]
	Malformed { reference: String },

	#[error("No installed app with label '{app_label}'")]
	UnknownApp { app_label: String },

	#[error("App '{app_label}' doesn't have a '{model_name}' entity")]
	UnknownEntity {
		app_label: String,
		model_name: String,
	},
}

/// Errors raised by the view schema editor
#[derive(Debug, Error)]
pub enum ViewSchemaError {
	#[error("Unresolved base entity: {0}")]
	UnresolvedReference(#[from] UnresolvedReference),

	#[error("'{entity}' is not a materialized view")]
	NotMaterialized { entity: String },

	#[error("'{entity}' has no field named '{field}'")]
	UnknownField { entity: String, field: String },

	#[error("'{entity}' already has a field named '{field}'")]
	DuplicateField { entity: String, field: String },

	#[error("View '{entity}' must select at least one field")]
	EmptyDefinition { entity: String },

	#[error("{database} does not support {feature}")]
	Unsupported {
		database: DatabaseType,
		feature: &'static str,
	},

	/// Failure reported by the executor, passed through unchanged
	#[error(transparent)]
	Execution(#[from] SchemaEditorError),
}

pub type ViewSchemaResult<T> = Result<T, ViewSchemaError>;
