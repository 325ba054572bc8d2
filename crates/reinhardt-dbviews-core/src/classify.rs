//! Entity classification
//!
//! Every decision point in the schema editor asks [`classify`] what kind of
//! object an entity maps to. Nothing caches the answer.

use crate::entity::EntityDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Database object an entity maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
	Table,
	View,
	MaterializedView,
}

impl EntityKind {
	/// `View` or `MaterializedView`
	pub fn is_view(self) -> bool {
		matches!(self, EntityKind::View | EntityKind::MaterializedView)
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EntityKind::Table => write!(f, "table"),
			EntityKind::View => write!(f, "view"),
			EntityKind::MaterializedView => write!(f, "materialized view"),
		}
	}
}

/// Classify an entity from its declared metadata
///
/// An entity without a `materialized` flag is a table, including a view
/// declaration that forgot the flag; [`crate::checks`] reports that case.
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::classify::{EntityKind, classify};
/// use reinhardt_dbviews_core::entity::EntityDescriptor;
///
/// let order = EntityDescriptor::table("shop", "Order", "shop_order");
/// assert_eq!(classify(&order), EntityKind::Table);
///
/// let sales = EntityDescriptor::view("reports", "Sales", "sales").materialized(true);
/// assert_eq!(classify(&sales), EntityKind::MaterializedView);
/// ```
pub fn classify(entity: &EntityDescriptor) -> EntityKind {
	match entity.view.as_ref().and_then(|view| view.materialized) {
		None => EntityKind::Table,
		Some(false) => EntityKind::View,
		Some(true) => EntityKind::MaterializedView,
	}
}
