//! View definition resolution
//!
//! Turns a view declaration into the SELECT that backs it: the base entity is
//! looked up through the injected [`Registry`], the fields are compiled with
//! [`compile`], and the result is rendered with `sea-query` for the target
//! backend.

use crate::backends::types::DatabaseType;
use crate::compiler::{CompiledDefinition, compile};
use crate::entity::{EntityDescriptor, FieldSpec, SourceExpr};
use crate::error::{UnresolvedReference, ViewSchemaError, ViewSchemaResult};
use crate::registry::Registry;
use sea_query::{
	Alias, Expr, MysqlQueryBuilder, PostgresQueryBuilder, Query, SelectStatement,
	SqliteQueryBuilder,
};

/// Column used for `pk` when the base entity does not declare its primary key
const DEFAULT_PRIMARY_KEY: &str = "id";

/// Column name that stands for the base entity's primary key
const PK_ALIAS: &str = "pk";

/// A view's compiled fields attached to its resolved base entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDefinition {
	pub base: EntityDescriptor,
	pub compiled: CompiledDefinition,
}

impl ViewDefinition {
	/// Build the SELECT statement for this view
	///
	/// Concrete columns come first, then annotations aliased to their field
	/// names. When any annotation aggregates, every other output is added to
	/// `GROUP BY`.
	pub fn select_statement(&self) -> SelectStatement {
		let mut select = Query::select();

		for column in &self.compiled.concrete_columns {
			select.column(Alias::new(column.clone()));
		}
		for (name, source) in &self.compiled.annotations {
			select.expr_as(self.source_expr(source), Alias::new(name.clone()));
		}
		select.from(Alias::new(self.base.table_name.clone()));

		if self.compiled.has_aggregates() {
			for column in &self.compiled.concrete_columns {
				select.group_by_col(Alias::new(column.clone()));
			}
			let grouped: Vec<Expr> = self
				.compiled
				.annotations
				.values()
				.filter(|source| !source.is_aggregate())
				.map(|source| self.source_expr(source))
				.collect();
			select.add_group_by(grouped);
		}

		select
	}

	/// Render the SELECT for `database_type`
	pub fn to_sql(&self, database_type: DatabaseType) -> String {
		let select = self.select_statement();
		match database_type {
			DatabaseType::Postgres => select.to_string(PostgresQueryBuilder),
			DatabaseType::Sqlite => select.to_string(SqliteQueryBuilder),
			DatabaseType::Mysql => select.to_string(MysqlQueryBuilder),
		}
	}

	fn source_expr(&self, source: &SourceExpr) -> Expr {
		match source {
			SourceExpr::Column { column } => Expr::col(Alias::new(self.resolve_column(column))),
			SourceExpr::Expression { sql, .. } => Expr::cust(sql.clone()),
		}
	}

	fn resolve_column(&self, column: &str) -> String {
		if column == PK_ALIAS {
			self.base
				.primary_key
				.clone()
				.unwrap_or_else(|| DEFAULT_PRIMARY_KEY.to_string())
		} else {
			column.to_string()
		}
	}
}

/// Resolves view declarations against a [`Registry`]
pub struct DefinitionResolver<'r> {
	registry: &'r dyn Registry,
}

impl<'r> DefinitionResolver<'r> {
	pub fn new(registry: &'r dyn Registry) -> Self {
		Self { registry }
	}

	/// Look up the entity a view is built over
	pub fn resolve_base_entity(
		&self,
		entity: &EntityDescriptor,
	) -> Result<EntityDescriptor, UnresolvedReference> {
		let reference =
			entity
				.base_entity_reference()
				.ok_or_else(|| UnresolvedReference::Missing {
					entity: entity.label(),
				})?;
		self.registry.resolve(reference)
	}

	/// Compile `entity`'s fields, plus `extra`, over its base entity
	///
	/// `extra` is compiled as if it were the last declared field; `entity` is
	/// left untouched. A view with no fields at all is rejected.
	pub fn resolve(
		&self,
		entity: &EntityDescriptor,
		extra: Option<&FieldSpec>,
	) -> ViewSchemaResult<ViewDefinition> {
		let base = self.resolve_base_entity(entity)?;
		let compiled = compile(&entity.fields, extra);
		if compiled.output_names().next().is_none() {
			return Err(ViewSchemaError::EmptyDefinition {
				entity: entity.label(),
			});
		}
		Ok(ViewDefinition { base, compiled })
	}
}
