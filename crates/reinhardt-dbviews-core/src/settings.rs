//! View schema settings
//!
//! Settings are read from TOML. Every key is optional:
//!
//! ```toml
//! drop_if_exists = false
//! cascade_on_drop = false
//! materialize_with_data = true
//! refresh_non_materialized = "error"   # or "ignore"
//! ```

use crate::ddl::DdlOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// What to do when a refresh is requested for something that is not a
/// materialized view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
	/// Fail with [`crate::error::ViewSchemaError::NotMaterialized`]
	#[default]
	Error,
	/// Log a warning and do nothing
	Ignore,
}

/// Settings for the view schema editor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSchemaSettings {
	/// Emit `DROP ... IF EXISTS` instead of an unconditional drop
	pub drop_if_exists: bool,

	/// Append `CASCADE` to drops so dependent objects go too
	pub cascade_on_drop: bool,

	/// `WITH DATA` / `WITH NO DATA` on materialized view creation
	pub materialize_with_data: Option<bool>,

	pub refresh_non_materialized: RefreshPolicy,
}

#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),

	#[error("Invalid settings: {0}")]
	Parse(#[from] toml::de::Error),
}

impl ViewSchemaSettings {
	/// Parse settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dbviews_core::settings::{RefreshPolicy, ViewSchemaSettings};
	///
	/// let settings = ViewSchemaSettings::from_toml_str(r#"
	///     drop_if_exists = true
	///     refresh_non_materialized = "ignore"
	/// "#).unwrap();
	///
	/// assert!(settings.drop_if_exists);
	/// assert!(!settings.cascade_on_drop);
	/// assert_eq!(settings.refresh_non_materialized, RefreshPolicy::Ignore);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Read settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// DDL generation options derived from these settings
	pub fn ddl_options(&self) -> DdlOptions {
		DdlOptions {
			if_exists: self.drop_if_exists,
			cascade: self.cascade_on_drop,
			with_data: self.materialize_with_data,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults_match_unconditional_drop() {
		let settings = ViewSchemaSettings::from_toml_str("").unwrap();
		assert_eq!(settings, ViewSchemaSettings::default());
		assert_eq!(settings.ddl_options(), DdlOptions::default());
		assert_eq!(settings.refresh_non_materialized, RefreshPolicy::Error);
	}

	#[rstest]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "cascade_on_drop = true\nmaterialize_with_data = false").unwrap();

		let settings = ViewSchemaSettings::from_file(file.path()).unwrap();
		let options = settings.ddl_options();
		assert!(options.cascade);
		assert!(!options.if_exists);
		assert_eq!(options.with_data, Some(false));
	}

	#[rstest]
	fn test_unknown_policy_is_rejected() {
		let err = ViewSchemaSettings::from_toml_str(r#"refresh_non_materialized = "retry""#)
			.unwrap_err();
		assert!(matches!(err, SettingsError::Parse(_)));
	}

	#[rstest]
	fn test_missing_file_is_io_error() {
		let err = ViewSchemaSettings::from_file("/nonexistent/dbviews.toml").unwrap_err();
		assert!(matches!(err, SettingsError::Io(_)));
	}
}
