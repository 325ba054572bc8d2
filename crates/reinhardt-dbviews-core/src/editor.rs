//! View-aware schema editor
//!
//! [`ViewSchemaEditor`] sits in front of the ordinary table schema editor.
//! Operations on entities declared as views or materialized views are turned
//! into `CREATE`/`DROP`/`REFRESH` statements; everything else is handed to the
//! [`TableSchemaEditor`] it was built with.
//!
//! Views have no `ALTER` path. A field change drops the view and creates it
//! again from the changed definition, on the same executor and in that
//! order. The caller decides whether both statements share a transaction.
//!
//! # Example
//!
//! ```rust
//! use reinhardt_dbviews_core::backends::{CollectSqlExecutor, DatabaseType};
//! use reinhardt_dbviews_core::editor::ViewSchemaEditor;
//! use reinhardt_dbviews_core::entity::{EntityDescriptor, FieldSpec, FieldType, SourceExpr};
//! use reinhardt_dbviews_core::registry::EntityRegistry;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let registry = EntityRegistry::new();
//! registry.register(EntityDescriptor::table("shop", "Order", "shop_order"));
//!
//! let sales = EntityDescriptor::view("reports", "Sales", "sales")
//!     .materialized(true)
//!     .base_entity("shop.Order")
//!     .field(FieldSpec::new("region", FieldType::Text))
//!     .field(FieldSpec::new("total", FieldType::Double).source(SourceExpr::aggregate("SUM(amount)")));
//!
//! let mut editor = ViewSchemaEditor::new(
//!     Arc::new(registry),
//!     CollectSqlExecutor::new(DatabaseType::Postgres),
//! );
//! editor.create_model(&sales, None).await.unwrap();
//!
//! assert_eq!(
//!     editor.executor().statements(),
//!     [r#"CREATE MATERIALIZED VIEW "sales" AS SELECT "region", SUM(amount) AS "total" FROM "shop_order" GROUP BY "region""#]
//! );
//! # }
//! ```

use crate::backends::schema::{SchemaEditorError, SchemaEditorResult, SchemaExecutor};
use crate::classify::{EntityKind, classify};
use crate::ddl::ViewStatements;
use crate::entity::{EntityDescriptor, FieldSpec};
use crate::error::{ViewSchemaError, ViewSchemaResult};
use crate::registry::Registry;
use crate::resolver::DefinitionResolver;
use crate::settings::{RefreshPolicy, ViewSchemaSettings};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Schema editor for ordinary tables
///
/// [`ViewSchemaEditor`] delegates every operation on a [`EntityKind::Table`]
/// entity to this trait, passing along its executor.
#[async_trait]
pub trait TableSchemaEditor: Send + Sync {
	async fn create_model(
		&self,
		executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
	) -> SchemaEditorResult<()>;

	async fn delete_model(
		&self,
		executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
	) -> SchemaEditorResult<()>;

	async fn add_field(
		&self,
		executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
		field: &FieldSpec,
	) -> SchemaEditorResult<()>;

	async fn remove_field(
		&self,
		executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
		field_name: &str,
	) -> SchemaEditorResult<()>;

	async fn alter_field(
		&self,
		executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
		old_name: &str,
		new_field: &FieldSpec,
	) -> SchemaEditorResult<()>;
}

/// Table editor that rejects every operation
///
/// Used when the editor only manages views.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedTableEditor;

impl UnsupportedTableEditor {
	fn reject(entity: &EntityDescriptor) -> SchemaEditorResult<()> {
		Err(SchemaEditorError::InvalidOperation(format!(
			"No table schema editor configured for '{}'",
			entity.label()
		)))
	}
}

#[async_trait]
impl TableSchemaEditor for UnsupportedTableEditor {
	async fn create_model(
		&self,
		_executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
	) -> SchemaEditorResult<()> {
		Self::reject(entity)
	}

	async fn delete_model(
		&self,
		_executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
	) -> SchemaEditorResult<()> {
		Self::reject(entity)
	}

	async fn add_field(
		&self,
		_executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
		_field: &FieldSpec,
	) -> SchemaEditorResult<()> {
		Self::reject(entity)
	}

	async fn remove_field(
		&self,
		_executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
		_field_name: &str,
	) -> SchemaEditorResult<()> {
		Self::reject(entity)
	}

	async fn alter_field(
		&self,
		_executor: &mut dyn SchemaExecutor,
		entity: &EntityDescriptor,
		_old_name: &str,
		_new_field: &FieldSpec,
	) -> SchemaEditorResult<()> {
		Self::reject(entity)
	}
}

/// Schema editor that manages views and materialized views
///
/// Field mutations take `&mut EntityDescriptor` and write the change back
/// only after every statement has succeeded. On failure the descriptor is
/// exactly as it was passed in.
pub struct ViewSchemaEditor<E, T = UnsupportedTableEditor> {
	registry: Arc<dyn Registry>,
	executor: E,
	tables: T,
	settings: ViewSchemaSettings,
}

impl<E: SchemaExecutor> ViewSchemaEditor<E, UnsupportedTableEditor> {
	/// Create an editor that manages views only
	pub fn new(registry: Arc<dyn Registry>, executor: E) -> Self {
		Self {
			registry,
			executor,
			tables: UnsupportedTableEditor,
			settings: ViewSchemaSettings::default(),
		}
	}
}

impl<E, T> ViewSchemaEditor<E, T>
where
	E: SchemaExecutor,
	T: TableSchemaEditor,
{
	/// Delegate table operations to `tables`
	pub fn with_table_editor<U: TableSchemaEditor>(self, tables: U) -> ViewSchemaEditor<E, U> {
		ViewSchemaEditor {
			registry: self.registry,
			executor: self.executor,
			tables,
			settings: self.settings,
		}
	}

	pub fn with_settings(mut self, settings: ViewSchemaSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn settings(&self) -> &ViewSchemaSettings {
		&self.settings
	}

	pub fn executor(&self) -> &E {
		&self.executor
	}

	pub fn executor_mut(&mut self) -> &mut E {
		&mut self.executor
	}

	pub fn into_executor(self) -> E {
		self.executor
	}

	/// Create the database object for `entity`
	///
	/// `extra` is compiled as an additional last field without being added
	/// to `entity`.
	pub async fn create_model(
		&mut self,
		entity: &EntityDescriptor,
		extra: Option<&FieldSpec>,
	) -> ViewSchemaResult<()> {
		let kind = classify(entity);
		if kind == EntityKind::Table {
			return self.delegate_create(entity, extra).await;
		}

		let sql = self.create_statement(entity, kind, extra)?;
		self.execute(entity, &sql).await?;
		info!(entity = %entity.label(), kind = %kind, "Created view");
		Ok(())
	}

	/// Drop the database object for `entity`
	pub async fn delete_model(&mut self, entity: &EntityDescriptor) -> ViewSchemaResult<()> {
		let kind = classify(entity);
		if kind == EntityKind::Table {
			self.tables
				.delete_model(&mut self.executor, entity)
				.await?;
			return Ok(());
		}

		let sql = self.drop_statement(entity, kind)?;
		self.execute(entity, &sql).await?;
		info!(entity = %entity.label(), kind = %kind, "Dropped view");
		Ok(())
	}

	/// Add `field` to `entity`
	///
	/// For views this drops the view and creates it again with the new field.
	/// A field name that is already declared fails before any DDL runs.
	pub async fn add_field(
		&mut self,
		entity: &mut EntityDescriptor,
		field: FieldSpec,
	) -> ViewSchemaResult<()> {
		Self::reject_duplicate(entity, &field.name, None)?;
		if classify(entity) == EntityKind::Table {
			self.tables
				.add_field(&mut self.executor, entity, &field)
				.await?;
		} else {
			self.rebuild(entity, entity, Some(&field)).await?;
		}
		entity.fields.push(field);
		Ok(())
	}

	/// Remove the field named `field_name` from `entity`
	pub async fn remove_field(
		&mut self,
		entity: &mut EntityDescriptor,
		field_name: &str,
	) -> ViewSchemaResult<()> {
		if classify(entity) == EntityKind::Table {
			self.tables
				.remove_field(&mut self.executor, entity, field_name)
				.await?;
			entity.fields.retain(|f| f.name != field_name);
			return Ok(());
		}

		let position = Self::require_field(entity, field_name)?;
		let mut target = entity.clone();
		target.fields.remove(position);

		self.rebuild(entity, &target, None).await?;
		*entity = target;
		Ok(())
	}

	/// Replace the field named `old_name` with `new_field`
	///
	/// The new field takes the old field's position. Its name may not collide
	/// with any other declared field.
	pub async fn alter_field(
		&mut self,
		entity: &mut EntityDescriptor,
		old_name: &str,
		new_field: FieldSpec,
	) -> ViewSchemaResult<()> {
		Self::reject_duplicate(entity, &new_field.name, Some(old_name))?;
		if classify(entity) == EntityKind::Table {
			self.tables
				.alter_field(&mut self.executor, entity, old_name, &new_field)
				.await?;
			if let Some(position) = entity.field_position(old_name) {
				entity.fields[position] = new_field;
			}
			return Ok(());
		}

		let position = Self::require_field(entity, old_name)?;
		let mut target = entity.clone();
		target.fields[position] = new_field;

		self.rebuild(entity, &target, None).await?;
		*entity = target;
		Ok(())
	}

	/// Re-run the query behind a materialized view
	///
	/// Anything else fails with [`ViewSchemaError::NotMaterialized`], or is
	/// skipped with a warning under [`RefreshPolicy::Ignore`].
	pub async fn refresh_materialized_view(
		&mut self,
		entity: &EntityDescriptor,
		concurrent: bool,
	) -> ViewSchemaResult<()> {
		let kind = classify(entity);
		if kind != EntityKind::MaterializedView {
			return match self.settings.refresh_non_materialized {
				RefreshPolicy::Error => Err(ViewSchemaError::NotMaterialized {
					entity: entity.label(),
				}),
				RefreshPolicy::Ignore => {
					warn!(
						entity = %entity.label(),
						kind = %kind,
						"Skipping refresh of an entity that is not a materialized view"
					);
					Ok(())
				}
			};
		}

		self.ensure_materialized_supported()?;
		let name = self.executor.quote_name(&entity.table_name);
		let sql = self.statements().refresh_materialized_view(&name, concurrent);
		self.execute(entity, &sql).await?;
		info!(entity = %entity.label(), concurrent, "Refreshed materialized view");
		Ok(())
	}

	/// Drop `current` and create `target` in its place
	///
	/// Both statements are generated before anything runs, so an unresolved
	/// base entity leaves the database untouched.
	async fn rebuild(
		&mut self,
		current: &EntityDescriptor,
		target: &EntityDescriptor,
		extra: Option<&FieldSpec>,
	) -> ViewSchemaResult<()> {
		let drop = self.drop_statement(current, classify(current))?;
		let create = self.create_statement(target, classify(target), extra)?;

		let database = self.executor.database_type();
		if !database.supports_transactional_ddl() {
			warn!(
				entity = %current.label(),
				database = %database,
				"Rebuilding view without transactional DDL; a failed create leaves it dropped"
			);
		}

		self.execute(current, &drop).await?;
		self.execute(target, &create).await?;
		info!(entity = %target.label(), kind = %classify(target), "Rebuilt view");
		Ok(())
	}

	async fn delegate_create(
		&mut self,
		entity: &EntityDescriptor,
		extra: Option<&FieldSpec>,
	) -> ViewSchemaResult<()> {
		match extra {
			Some(field) => {
				let mut with_extra = entity.clone();
				with_extra.fields.push(field.clone());
				self.tables
					.create_model(&mut self.executor, &with_extra)
					.await?
			}
			None => self.tables.create_model(&mut self.executor, entity).await?,
		}
		Ok(())
	}

	fn create_statement(
		&self,
		entity: &EntityDescriptor,
		kind: EntityKind,
		extra: Option<&FieldSpec>,
	) -> ViewSchemaResult<String> {
		if kind == EntityKind::MaterializedView {
			self.ensure_materialized_supported()?;
		}

		let definition = DefinitionResolver::new(self.registry.as_ref()).resolve(entity, extra)?;
		let select = definition.to_sql(self.executor.database_type());
		let name = self.executor.quote_name(&entity.table_name);
		let statements = self.statements();

		Ok(match kind {
			EntityKind::MaterializedView => statements.create_materialized_view(&name, &select),
			_ => statements.create_view(&name, &select),
		})
	}

	fn drop_statement(&self, entity: &EntityDescriptor, kind: EntityKind) -> ViewSchemaResult<String> {
		let name = self.executor.quote_name(&entity.table_name);
		let statements = self.statements();

		if kind == EntityKind::MaterializedView {
			self.ensure_materialized_supported()?;
			Ok(statements.drop_materialized_view(&name))
		} else {
			Ok(statements.drop_view(&name))
		}
	}

	fn statements(&self) -> ViewStatements {
		ViewStatements::new(self.settings.ddl_options())
	}

	fn ensure_materialized_supported(&self) -> ViewSchemaResult<()> {
		let database = self.executor.database_type();
		if database.supports_materialized_views() {
			Ok(())
		} else {
			Err(ViewSchemaError::Unsupported {
				database,
				feature: "materialized views",
			})
		}
	}

	/// Fail when `name` is declared on `entity` by a field other than `replacing`
	fn reject_duplicate(
		entity: &EntityDescriptor,
		name: &str,
		replacing: Option<&str>,
	) -> ViewSchemaResult<()> {
		if replacing != Some(name) && entity.get_field(name).is_some() {
			return Err(ViewSchemaError::DuplicateField {
				entity: entity.label(),
				field: name.to_string(),
			});
		}
		Ok(())
	}

	fn require_field(entity: &EntityDescriptor, name: &str) -> ViewSchemaResult<usize> {
		entity
			.field_position(name)
			.ok_or_else(|| ViewSchemaError::UnknownField {
				entity: entity.label(),
				field: name.to_string(),
			})
	}

	async fn execute(&mut self, entity: &EntityDescriptor, sql: &str) -> ViewSchemaResult<()> {
		debug!(entity = %entity.label(), sql = %sql, "Executing view DDL");
		self.executor.execute(sql).await?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backends::schema::test_utils::MockSchemaExecutor;
	use crate::backends::types::DatabaseType;
	use crate::entity::{FieldType, SourceExpr};
	use crate::registry::EntityRegistry;
	use rstest::*;

	#[fixture]
	fn registry() -> Arc<dyn Registry> {
		let registry = EntityRegistry::new();
		registry.register(EntityDescriptor::table("shop", "Order", "shop_order"));
		Arc::new(registry)
	}

	fn order_summary() -> EntityDescriptor {
		EntityDescriptor::view("reports", "OrderSummary", "order_summary")
			.materialized(false)
			.base_entity("shop.Order")
			.field(FieldSpec::new("region", FieldType::Text))
			.field(FieldSpec::new("amount", FieldType::Double))
	}

	#[rstest]
	#[tokio::test]
	async fn test_create_plain_view(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		editor.create_model(&order_summary(), None).await.unwrap();

		assert_eq!(
			editor.executor().executed(),
			[r#"CREATE VIEW "order_summary" AS SELECT "region", "amount" FROM "shop_order""#]
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_create_extra_field_is_not_persisted(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let view = order_summary();
		let extra = FieldSpec::new("customer", FieldType::Text);

		editor.create_model(&view, Some(&extra)).await.unwrap();

		assert!(editor.executor().executed()[0].contains(r#""customer""#));
		assert_eq!(view.fields.len(), 2);
	}

	#[rstest]
	#[tokio::test]
	async fn test_remove_field_rebuilds_without_it(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();

		editor.remove_field(&mut view, "amount").await.unwrap();

		assert_eq!(
			editor.executor().executed(),
			[
				r#"DROP VIEW "order_summary""#,
				r#"CREATE VIEW "order_summary" AS SELECT "region" FROM "shop_order""#,
			]
		);
		assert!(view.get_field("amount").is_none());
	}

	#[rstest]
	#[tokio::test]
	async fn test_remove_unknown_field_runs_nothing(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();

		let err = editor.remove_field(&mut view, "discount").await.unwrap_err();

		assert!(matches!(err, ViewSchemaError::UnknownField { ref field, .. } if field == "discount"));
		assert!(editor.executor().executed().is_empty());
		assert_eq!(view, order_summary());
	}

	#[rstest]
	#[tokio::test]
	async fn test_add_existing_field_name_runs_nothing(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();

		let err = editor
			.add_field(
				&mut view,
				FieldSpec::new("region", FieldType::Text).source(SourceExpr::expression("UPPER(region)")),
			)
			.await
			.unwrap_err();

		assert!(matches!(err, ViewSchemaError::DuplicateField { ref field, .. } if field == "region"));
		assert!(editor.executor().executed().is_empty());
		assert_eq!(view, order_summary());
	}

	#[rstest]
	#[tokio::test]
	async fn test_alter_field_onto_other_field_runs_nothing(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();

		let err = editor
			.alter_field(&mut view, "amount", FieldSpec::new("region", FieldType::Text))
			.await
			.unwrap_err();

		assert!(matches!(err, ViewSchemaError::DuplicateField { ref field, .. } if field == "region"));
		assert!(editor.executor().executed().is_empty());
		assert_eq!(view, order_summary());
	}

	#[rstest]
	#[tokio::test]
	async fn test_alter_field_may_keep_its_own_name(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();

		editor
			.alter_field(
				&mut view,
				"amount",
				FieldSpec::new("amount", FieldType::Double).source(SourceExpr::expression("amount * 100")),
			)
			.await
			.unwrap();

		assert_eq!(
			editor.executor().executed()[1],
			r#"CREATE VIEW "order_summary" AS SELECT "region", amount * 100 AS "amount" FROM "shop_order""#
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_remove_last_field_runs_nothing(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();
		editor.remove_field(&mut view, "amount").await.unwrap();

		let err = editor.remove_field(&mut view, "region").await.unwrap_err();

		assert!(matches!(err, ViewSchemaError::EmptyDefinition { .. }));
		assert_eq!(editor.executor().executed().len(), 2);
		assert_eq!(view.fields.len(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_alter_field_keeps_position(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let mut view = order_summary();
		let renamed = FieldSpec::new("area", FieldType::Text).source("region");

		editor.alter_field(&mut view, "region", renamed).await.unwrap();

		assert_eq!(
			editor.executor().executed()[1],
			r#"CREATE VIEW "order_summary" AS SELECT "amount", "region" AS "area" FROM "shop_order""#
		);
		assert_eq!(view.fields[0].name, "area");
		assert_eq!(view.fields[1].name, "amount");
	}

	#[rstest]
	#[tokio::test]
	async fn test_unresolved_base_fails_before_any_ddl() {
		let mut editor = ViewSchemaEditor::new(Arc::new(EntityRegistry::new()), MockSchemaExecutor::new());
		let mut view = order_summary();

		let err = editor
			.add_field(&mut view, FieldSpec::new("customer", FieldType::Text))
			.await
			.unwrap_err();

		assert!(matches!(err, ViewSchemaError::UnresolvedReference(_)));
		assert!(editor.executor().executed().is_empty());
		assert_eq!(view.fields.len(), 2);
	}

	#[rstest]
	#[case(DatabaseType::Sqlite)]
	#[case(DatabaseType::Mysql)]
	#[tokio::test]
	async fn test_materialized_view_requires_postgres(registry: Arc<dyn Registry>, #[case] database: DatabaseType) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::with_database_type(database));
		let view = order_summary()
			.materialized(true)
			.field(FieldSpec::new("orders", FieldType::BigInteger).source(SourceExpr::aggregate("COUNT(*)")));

		let err = editor.create_model(&view, None).await.unwrap_err();

		assert!(matches!(err, ViewSchemaError::Unsupported { database: d, .. } if d == database));
		assert!(editor.executor().executed().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_plain_view_on_sqlite(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(
			registry,
			MockSchemaExecutor::with_database_type(DatabaseType::Sqlite),
		);
		editor.delete_model(&order_summary()).await.unwrap();
		assert_eq!(editor.executor().executed(), [r#"DROP VIEW "order_summary""#]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_drop_options_come_from_settings(registry: Arc<dyn Registry>) {
		let settings = ViewSchemaSettings {
			drop_if_exists: true,
			cascade_on_drop: true,
			..ViewSchemaSettings::default()
		};
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new()).with_settings(settings);
		let view = order_summary().materialized(true);

		editor.delete_model(&view).await.unwrap();

		assert_eq!(
			editor.executor().executed(),
			[r#"DROP MATERIALIZED VIEW IF EXISTS "order_summary" CASCADE"#]
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_refresh_plain_view_is_an_error_by_default(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());

		let err = editor
			.refresh_materialized_view(&order_summary(), false)
			.await
			.unwrap_err();

		assert!(matches!(err, ViewSchemaError::NotMaterialized { .. }));
		assert!(editor.executor().executed().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_refresh_plain_view_ignored_by_policy(registry: Arc<dyn Registry>) {
		let settings = ViewSchemaSettings {
			refresh_non_materialized: RefreshPolicy::Ignore,
			..ViewSchemaSettings::default()
		};
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new()).with_settings(settings);

		editor
			.refresh_materialized_view(&order_summary(), true)
			.await
			.unwrap();
		assert!(editor.executor().executed().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_table_without_table_editor_is_rejected(registry: Arc<dyn Registry>) {
		let mut editor = ViewSchemaEditor::new(registry, MockSchemaExecutor::new());
		let table = EntityDescriptor::table("shop", "Customer", "shop_customer");

		let err = editor.create_model(&table, None).await.unwrap_err();

		assert!(matches!(
			err,
			ViewSchemaError::Execution(SchemaEditorError::InvalidOperation(_))
		));
	}
}
