//! View field compilation
//!
//! Splits a view's fields into the base columns it selects as-is and the
//! annotations it computes. The split mirrors `only(...)` plus
//! `annotate(...)` on a queryset over the base model.

use crate::entity::{FieldSpec, SourceExpr};
use indexmap::{IndexMap, IndexSet};

/// Compiled body of a view, before it is attached to a base table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledDefinition {
	/// Base columns selected under their own name, in declaration order
	pub concrete_columns: IndexSet<String>,
	/// Output name to source expression, in declaration order
	pub annotations: IndexMap<String, SourceExpr>,
}

impl CompiledDefinition {
	/// True when at least one annotation is an aggregate
	pub fn has_aggregates(&self) -> bool {
		self.annotations.values().any(SourceExpr::is_aggregate)
	}

	/// Output column names in SELECT order
	pub fn output_names(&self) -> impl Iterator<Item = &str> {
		self.concrete_columns
			.iter()
			.chain(self.annotations.keys())
			.map(String::as_str)
	}

	fn push(&mut self, field: &FieldSpec) {
		match field.source.as_ref().filter(|source| !source.is_blank()) {
			None => {
				self.annotations.shift_remove(&field.name);
				self.concrete_columns.insert(field.name.clone());
			}
			Some(source) => {
				self.concrete_columns.shift_remove(&field.name);
				self.annotations.insert(field.name.clone(), source.clone());
			}
		}
	}
}

/// Compile `fields` plus an optional `extra` field into a [`CompiledDefinition`]
///
/// A field without a source, or with a blank one, becomes a concrete column;
/// every other field becomes an annotation. When a name repeats, the later
/// declaration wins and the name ends up in exactly one collection. `extra`
/// is compiled last.
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::compiler::compile;
/// use reinhardt_dbviews_core::entity::{FieldSpec, FieldType, SourceExpr};
///
/// let fields = vec![
///     FieldSpec::new("name", FieldType::Text),
///     FieldSpec::new("unique_id", FieldType::Integer).source("pk"),
/// ];
/// let compiled = compile(&fields, None);
///
/// assert_eq!(compiled.concrete_columns.len(), 1);
/// assert_eq!(compiled.annotations["unique_id"], SourceExpr::column("pk"));
/// ```
pub fn compile(fields: &[FieldSpec], extra: Option<&FieldSpec>) -> CompiledDefinition {
	let mut compiled = CompiledDefinition::default();
	for field in fields.iter().chain(extra) {
		compiled.push(field);
	}
	compiled
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entity::FieldType;
	use rstest::rstest;

	fn text(name: &str) -> FieldSpec {
		FieldSpec::new(name, FieldType::Text)
	}

	#[rstest]
	fn test_concrete_columns_keep_declaration_order() {
		let fields = vec![text("zeta"), text("alpha"), text("mid")];
		let compiled = compile(&fields, None);

		let order: Vec<_> = compiled.concrete_columns.iter().map(String::as_str).collect();
		assert_eq!(order, ["zeta", "alpha", "mid"]);
		assert!(compiled.annotations.is_empty());
	}

	#[rstest]
	fn test_every_name_lands_in_exactly_one_collection() {
		let fields = vec![
			text("name"),
			text("unique_id").source("pk"),
			text("tags").source(SourceExpr::aggregate("STRING_AGG(tag, '; ')")),
			text("name"),
			text("upper_name").source(SourceExpr::expression("UPPER(name)")),
		];
		let compiled = compile(&fields, None);

		for field in &fields {
			let in_columns = compiled.concrete_columns.contains(&field.name);
			let in_annotations = compiled.annotations.contains_key(&field.name);
			assert!(in_columns ^ in_annotations, "{} must be in exactly one", field.name);
		}
		assert_eq!(compiled.concrete_columns.len(), 1);
		assert_eq!(compiled.annotations.len(), 3);
		assert!(compiled.has_aggregates());
	}

	#[rstest]
	fn test_redeclared_name_moves_between_collections() {
		let fields = vec![text("total")];
		let extra = text("total").source(SourceExpr::aggregate("SUM(amount)"));
		let compiled = compile(&fields, Some(&extra));

		assert!(compiled.concrete_columns.is_empty());
		assert_eq!(compiled.annotations["total"], SourceExpr::aggregate("SUM(amount)"));
	}

	#[rstest]
	fn test_extra_field_is_compiled_last() {
		let fields = vec![text("a"), text("b")];
		let compiled = compile(&fields, Some(&text("c")));

		let names: Vec<_> = compiled.output_names().collect();
		assert_eq!(names, ["a", "b", "c"]);
	}

	#[rstest]
	#[case(SourceExpr::column(""))]
	#[case(SourceExpr::expression("   "))]
	fn test_blank_source_falls_back_to_column(#[case] source: SourceExpr) {
		let fields = vec![text("region").source(source)];
		let compiled = compile(&fields, None);

		assert!(compiled.concrete_columns.contains("region"));
		assert!(compiled.annotations.is_empty());
	}

	#[rstest]
	fn test_empty_field_list() {
		let compiled = compile(&[], None);
		assert_eq!(compiled, CompiledDefinition::default());
		assert!(!compiled.has_aggregates());
	}
}
