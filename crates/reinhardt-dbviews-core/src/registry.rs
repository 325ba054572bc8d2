//! Entity registry
//!
//! The [`Registry`] trait is how view definitions find their base entity.
//! [`EntityRegistry`] is the in-memory implementation: the declaration layer
//! registers every table and view in it, and the schema editor and checks
//! read from it.
//!
//! # Django Reference
//! Base model references are resolved the way `apps.get_model("app.Model")`
//! resolves them: the label is split on the dot and the model name is
//! matched case-insensitively within the app.

use crate::entity::EntityDescriptor;
use crate::error::UnresolvedReference;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves dotted entity references
pub trait Registry: Send + Sync {
	/// Look up `app_label.ModelName`
	fn resolve(&self, reference: &str) -> Result<EntityDescriptor, UnresolvedReference>;
}

/// Split `app_label.ModelName` into its two parts
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::registry::split_reference;
///
/// assert_eq!(split_reference("shop.Order").unwrap(), ("shop", "Order"));
/// assert!(split_reference("shop").is_err());
/// assert!(split_reference("a.b.c").is_err());
/// ```
pub fn split_reference(reference: &str) -> Result<(&str, &str), UnresolvedReference> {
	let malformed = || UnresolvedReference::Malformed {
		reference: reference.to_string(),
	};

	let mut parts = reference.split('.');
	match (parts.next(), parts.next(), parts.next()) {
		(Some(app_label), Some(model_name), None)
			if !app_label.is_empty() && !model_name.is_empty() =>
		{
			Ok((app_label, model_name))
		}
		_ => Err(malformed()),
	}
}

/// Thread-safe in-memory entity registry
///
/// Cloning is cheap and clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
	/// (app_label, lowercased model_name) -> EntityDescriptor
	entities: Arc<RwLock<HashMap<(String, String), EntityDescriptor>>>,
}

impl EntityRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	fn key(app_label: &str, model_name: &str) -> (String, String) {
		(app_label.to_string(), model_name.to_lowercase())
	}

	/// Register an entity, returning the descriptor it replaced
	pub fn register(&self, entity: EntityDescriptor) -> Option<EntityDescriptor> {
		let key = Self::key(&entity.app_label, &entity.model_name);
		self.entities.write().insert(key, entity)
	}

	/// Remove an entity by `app_label.ModelName`
	pub fn unregister(&self, reference: &str) -> Option<EntityDescriptor> {
		let (app_label, model_name) = split_reference(reference).ok()?;
		self.entities
			.write()
			.remove(&Self::key(app_label, model_name))
	}

	pub fn get(&self, app_label: &str, model_name: &str) -> Option<EntityDescriptor> {
		self.entities
			.read()
			.get(&Self::key(app_label, model_name))
			.cloned()
	}

	/// All registered entities, ordered by label
	pub fn entities(&self) -> Vec<EntityDescriptor> {
		let mut entities: Vec<_> = self.entities.read().values().cloned().collect();
		entities.sort_by_key(|e| e.label());
		entities
	}

	pub fn len(&self) -> usize {
		self.entities.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.read().is_empty()
	}

	pub fn clear(&self) {
		self.entities.write().clear();
	}
}

impl Registry for EntityRegistry {
	fn resolve(&self, reference: &str) -> Result<EntityDescriptor, UnresolvedReference> {
		let (app_label, model_name) = split_reference(reference)?;
		let entities = self.entities.read();

		if let Some(entity) = entities.get(&Self::key(app_label, model_name)) {
			return Ok(entity.clone());
		}

		if entities.keys().any(|(app, _)| app == app_label) {
			Err(UnresolvedReference::UnknownEntity {
				app_label: app_label.to_string(),
				model_name: model_name.to_string(),
			})
		} else {
			Err(UnresolvedReference::UnknownApp {
				app_label: app_label.to_string(),
			})
		}
	}
}

impl<R: Registry + ?Sized> Registry for Arc<R> {
	fn resolve(&self, reference: &str) -> Result<EntityDescriptor, UnresolvedReference> {
		(**self).resolve(reference)
	}
}
