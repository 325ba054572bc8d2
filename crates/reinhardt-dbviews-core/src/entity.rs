//! Declared schema entities
//!
//! An [`EntityDescriptor`] is what the model declaration layer hands to the
//! view schema editor: a table or a view, its physical name, and, for views,
//! the ordered field list and the [`ViewOptions`] that say how the view is
//! derived from its base entity.
//!
//! # Example
//!
//! ```rust
//! use reinhardt_dbviews_core::entity::{EntityDescriptor, FieldSpec, FieldType, SourceExpr};
//!
//! let sales = EntityDescriptor::view("reports", "Sales", "sales")
//!     .materialized(true)
//!     .base_entity("shop.Order")
//!     .field(FieldSpec::new("id", FieldType::BigInteger).source(SourceExpr::column("pk")))
//!     .field(FieldSpec::new("total", FieldType::Decimal { precision: 12, scale: 2 })
//!         .source(SourceExpr::aggregate("SUM(amount)")));
//!
//! assert_eq!(sales.label(), "reports.Sales");
//! assert_eq!(sales.fields.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Semantic type of a view output column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
	BigInteger,
	Integer,
	SmallInteger,
	VarChar(u32),
	Text,
	Boolean,
	Decimal { precision: u32, scale: u32 },
	Float,
	Double,
	Date,
	DateTime,
	TimestampTz,
	Uuid,
	Json,
	JsonBinary,
	/// Backend-specific type name used verbatim
	Custom(String),
}

/// Where a view field takes its value from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceExpr {
	/// A column of the base entity, exposed under the field name
	///
	/// `"pk"` refers to the base entity's primary key.
	Column { column: String },
	/// A SQL expression over the base entity, used verbatim
	Expression { sql: String, aggregate: bool },
}

impl SourceExpr {
	/// Reference a base entity column
	pub fn column(column: impl Into<String>) -> Self {
		SourceExpr::Column {
			column: column.into(),
		}
	}

	/// A row-level expression such as `UPPER(name)`
	pub fn expression(sql: impl Into<String>) -> Self {
		SourceExpr::Expression {
			sql: sql.into(),
			aggregate: false,
		}
	}

	/// An aggregate expression such as `SUM(amount)`
	pub fn aggregate(sql: impl Into<String>) -> Self {
		SourceExpr::Expression {
			sql: sql.into(),
			aggregate: true,
		}
	}

	pub fn is_aggregate(&self) -> bool {
		matches!(self, SourceExpr::Expression { aggregate: true, .. })
	}

	/// True when the source carries no text at all
	pub fn is_blank(&self) -> bool {
		match self {
			SourceExpr::Column { column } => column.trim().is_empty(),
			SourceExpr::Expression { sql, .. } => sql.trim().is_empty(),
		}
	}
}

impl From<&str> for SourceExpr {
	fn from(column: &str) -> Self {
		SourceExpr::column(column)
	}
}

impl From<String> for SourceExpr {
	fn from(column: String) -> Self {
		SourceExpr::Column { column }
	}
}

/// One declared output column of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
	pub name: String,
	pub output_type: FieldType,
	#[serde(default)]
	pub source: Option<SourceExpr>,
}

impl FieldSpec {
	/// A field read directly from the base column of the same name
	pub fn new(name: impl Into<String>, output_type: FieldType) -> Self {
		Self {
			name: name.into(),
			output_type,
			source: None,
		}
	}

	/// Take the value from `source` instead of the same-named column
	pub fn source(mut self, source: impl Into<SourceExpr>) -> Self {
		self.source = Some(source.into());
		self
	}
}

/// View metadata attached to an entity declared as a view model
///
/// Both attributes are optional here so that a declaration missing them can
/// still be registered and reported by [`crate::checks`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
	/// `Some(true)` for a materialized view, `Some(false)` for a plain view
	#[serde(default)]
	pub materialized: Option<bool>,
	/// Dotted `app_label.ModelName` reference to the base entity
	#[serde(default)]
	pub base_entity: Option<String>,
}

/// A declared table or view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
	/// Application label (e.g., "shop")
	pub app_label: String,
	/// Model name (e.g., "Order")
	pub model_name: String,
	/// Physical table or view name (e.g., "shop_order")
	pub table_name: String,
	/// Primary key column, used to resolve `pk` sources on views built over this entity
	#[serde(default)]
	pub primary_key: Option<String>,
	/// Present when the entity was declared as a view model
	#[serde(default)]
	pub view: Option<ViewOptions>,
	#[serde(default)]
	pub fields: Vec<FieldSpec>,
}

impl EntityDescriptor {
	/// Declare an ordinary table
	pub fn table(
		app_label: impl Into<String>,
		model_name: impl Into<String>,
		table_name: impl Into<String>,
	) -> Self {
		Self {
			app_label: app_label.into(),
			model_name: model_name.into(),
			table_name: table_name.into(),
			primary_key: None,
			view: None,
			fields: Vec::new(),
		}
	}

	/// Declare a view model with no options set yet
	pub fn view(
		app_label: impl Into<String>,
		model_name: impl Into<String>,
		table_name: impl Into<String>,
	) -> Self {
		Self {
			view: Some(ViewOptions::default()),
			..Self::table(app_label, model_name, table_name)
		}
	}

	/// Set the `materialized` view option
	///
	/// Calling this on a table declaration turns it into a view declaration.
	pub fn materialized(mut self, materialized: bool) -> Self {
		self.view.get_or_insert_with(ViewOptions::default).materialized = Some(materialized);
		self
	}

	/// Set the base entity reference of a view
	pub fn base_entity(mut self, reference: impl Into<String>) -> Self {
		self.view.get_or_insert_with(ViewOptions::default).base_entity = Some(reference.into());
		self
	}

	pub fn primary_key(mut self, column: impl Into<String>) -> Self {
		self.primary_key = Some(column.into());
		self
	}

	pub fn field(mut self, field: FieldSpec) -> Self {
		self.fields.push(field);
		self
	}

	/// `app_label.ModelName`
	pub fn label(&self) -> String {
		format!("{}.{}", self.app_label, self.model_name)
	}

	/// Classification of this entity, see [`crate::classify::classify`]
	pub fn kind(&self) -> crate::classify::EntityKind {
		crate::classify::classify(self)
	}

	/// Whether the entity was declared as a view model, regardless of options
	pub fn is_view_declaration(&self) -> bool {
		self.view.is_some()
	}

	pub fn base_entity_reference(&self) -> Option<&str> {
		self.view.as_ref().and_then(|v| v.base_entity.as_deref())
	}

	pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|f| f.name == name)
	}

	pub(crate) fn field_position(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.name == name)
	}
}
