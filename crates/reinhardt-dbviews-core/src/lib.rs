//! # Reinhardt DB Views Core
//!
//! Database views and materialized views as schema-managed models.
//!
//! A model declared as a view is backed by a SELECT over another registered
//! model instead of a table of its own. This crate turns those declarations
//! into `CREATE VIEW` / `CREATE MATERIALIZED VIEW` statements, rebuilds the
//! view whenever a field changes, refreshes materialized views on request and
//! validates the declarations up front.
//!
//! ## Layout
//!
//! - [`entity`]: table and view declarations
//! - [`classify`]: table, view or materialized view
//! - [`compiler`]: field list to columns and annotations
//! - [`registry`] / [`resolver`]: base entity lookup and SELECT generation
//! - [`ddl`]: view statement text
//! - [`editor`]: the schema editor that runs it all
//! - [`checks`]: declaration diagnostics
//! - [`backends`]: executors for PostgreSQL and SQLite
//!
//! # Django Reference
//! Models with `materialized` and `base_model` class attributes, handled by a
//! schema editor that overrides `create_model`, `delete_model`, `add_field`,
//! `remove_field` and `alter_field`.

pub mod backends;
pub mod checks;
pub mod classify;
pub mod compiler;
pub mod ddl;
pub mod editor;
pub mod entity;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod settings;

pub use checks::{CheckLevel, Diagnostic, DiagnosticCode, check_entity, check_registry};
pub use classify::{EntityKind, classify};
pub use compiler::{CompiledDefinition, compile};
pub use ddl::{DdlOptions, ViewStatements};
pub use editor::{TableSchemaEditor, UnsupportedTableEditor, ViewSchemaEditor};
pub use entity::{EntityDescriptor, FieldSpec, FieldType, SourceExpr, ViewOptions};
pub use error::{UnresolvedReference, ViewSchemaError, ViewSchemaResult};
pub use registry::{EntityRegistry, Registry};
pub use resolver::{DefinitionResolver, ViewDefinition};
pub use settings::{RefreshPolicy, SettingsError, ViewSchemaSettings};

/// Commonly used types
pub mod prelude {
	pub use crate::backends::{
		CollectSqlExecutor, DatabaseType, SchemaEditorError, SchemaEditorResult, SchemaExecutor,
	};
	#[cfg(feature = "postgres")]
	pub use crate::backends::PostgresExecutor;
	#[cfg(feature = "sqlite")]
	pub use crate::backends::SqliteExecutor;
	pub use crate::checks::{Diagnostic, check_entity, check_registry};
	pub use crate::classify::EntityKind;
	pub use crate::editor::{TableSchemaEditor, ViewSchemaEditor};
	pub use crate::entity::{EntityDescriptor, FieldSpec, FieldType, SourceExpr};
	pub use crate::error::{ViewSchemaError, ViewSchemaResult};
	pub use crate::registry::{EntityRegistry, Registry};
	pub use crate::settings::ViewSchemaSettings;
}
