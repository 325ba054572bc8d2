//! System checks for view model declarations
//!
//! Checks never fail. Every problem found in a declaration is returned as a
//! [`Diagnostic`], so one run reports everything at once.
//!
//! # Django Reference
//! Mirrors a model's `check()` classmethod: `views.E100` and `views.E101`
//! correspond to the `models.E100` / `models.E101` errors for a missing
//! `materialized` flag and a missing or invalid base model.

use crate::entity::EntityDescriptor;
use crate::registry::{EntityRegistry, Registry};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Severity of a [`Diagnostic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CheckLevel {
	Warning,
	Error,
}

/// Identifies what a [`Diagnostic`] is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
	/// The view declaration has no `materialized` flag
	MissingMaterializedFlag,
	/// The view declaration has no base entity reference
	MissingBaseEntity,
	/// The base entity reference does not resolve
	UnresolvableBaseEntity,
	/// Two fields share a name
	DuplicateFieldName,
	/// A field source is blank and will be read from the same-named column
	BlankFieldSource,
}

impl DiagnosticCode {
	pub fn id(self) -> &'static str {
		match self {
			DiagnosticCode::MissingMaterializedFlag => "views.E100",
			DiagnosticCode::MissingBaseEntity => "views.E101",
			DiagnosticCode::UnresolvableBaseEntity => "views.E102",
			DiagnosticCode::DuplicateFieldName => "views.E103",
			DiagnosticCode::BlankFieldSource => "views.W100",
		}
	}

	pub fn level(self) -> CheckLevel {
		match self {
			DiagnosticCode::BlankFieldSource => CheckLevel::Warning,
			_ => CheckLevel::Error,
		}
	}
}

impl fmt::Display for DiagnosticCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// One finding of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	pub code: DiagnosticCode,
	pub level: CheckLevel,
	pub message: String,
	/// Label of the offending entity
	pub obj: String,
}

impl Diagnostic {
	fn new(code: DiagnosticCode, entity: &EntityDescriptor, message: impl Into<String>) -> Self {
		Self {
			code,
			level: code.level(),
			message: message.into(),
			obj: entity.label(),
		}
	}

	pub fn is_error(&self) -> bool {
		self.level == CheckLevel::Error
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: ({}) {}", self.obj, self.code, self.message)
	}
}

/// Check one entity declaration
///
/// Entities not declared as views produce no diagnostics.
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::checks::{DiagnosticCode, check_entity};
/// use reinhardt_dbviews_core::entity::EntityDescriptor;
/// use reinhardt_dbviews_core::registry::EntityRegistry;
///
/// let registry = EntityRegistry::new();
/// let broken = EntityDescriptor::view("reports", "Sales", "sales");
///
/// let codes: Vec<_> = check_entity(&broken, &registry)
///     .into_iter()
///     .map(|d| d.code)
///     .collect();
/// assert_eq!(
///     codes,
///     [DiagnosticCode::MissingMaterializedFlag, DiagnosticCode::MissingBaseEntity]
/// );
/// ```
pub fn check_entity(entity: &EntityDescriptor, registry: &dyn Registry) -> Vec<Diagnostic> {
	let Some(options) = entity.view.as_ref() else {
		return Vec::new();
	};
	let mut diagnostics = Vec::new();

	if options.materialized.is_none() {
		diagnostics.push(Diagnostic::new(
			DiagnosticCode::MissingMaterializedFlag,
			entity,
			"View models must declare whether they are materialized.",
		));
	}

	match options.base_entity.as_deref() {
		None => diagnostics.push(Diagnostic::new(
			DiagnosticCode::MissingBaseEntity,
			entity,
			"View models must declare a base entity as 'app_label.ModelName'.",
		)),
		Some(reference) => {
			if let Err(err) = registry.resolve(reference) {
				diagnostics.push(Diagnostic::new(
					DiagnosticCode::UnresolvableBaseEntity,
					entity,
					format!("Base entity '{}' could not be resolved: {}", reference, err),
				));
			}
		}
	}

	let mut seen = HashSet::new();
	for field in &entity.fields {
		if !seen.insert(field.name.as_str()) {
			diagnostics.push(Diagnostic::new(
				DiagnosticCode::DuplicateFieldName,
				entity,
				format!("Field '{}' is declared more than once.", field.name),
			));
		}
		if field.source.as_ref().is_some_and(|source| source.is_blank()) {
			diagnostics.push(Diagnostic::new(
				DiagnosticCode::BlankFieldSource,
				entity,
				format!(
					"Field '{}' has a blank source and will read the base column of the same name.",
					field.name
				),
			));
		}
	}

	diagnostics
}

/// Check every entity in `registry`, in label order
pub fn check_registry(registry: &EntityRegistry) -> Vec<Diagnostic> {
	registry
		.entities()
		.iter()
		.flat_map(|entity| check_entity(entity, registry))
		.collect()
}
