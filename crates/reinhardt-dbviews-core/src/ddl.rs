//! View DDL generation
//!
//! Plain string assembly over already-quoted names and an already-rendered
//! SELECT. No classification or validation happens here.

/// Options that change the shape of generated statements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DdlOptions {
	/// `DROP ... IF EXISTS`
	pub if_exists: bool,
	/// `DROP ... CASCADE`
	pub cascade: bool,
	/// `WITH DATA` / `WITH NO DATA` after `CREATE MATERIALIZED VIEW`
	pub with_data: Option<bool>,
}

/// Generator for view and materialized view statements
///
/// # Examples
///
/// ```rust
/// use reinhardt_dbviews_core::ddl::ViewStatements;
///
/// let ddl = ViewStatements::default();
/// assert_eq!(
///     ddl.create_view("\"order_ids\"", "SELECT \"id\" FROM \"shop_order\""),
///     "CREATE VIEW \"order_ids\" AS SELECT \"id\" FROM \"shop_order\""
/// );
/// assert_eq!(
///     ddl.refresh_materialized_view("\"sales\"", true),
///     "REFRESH MATERIALIZED VIEW CONCURRENTLY \"sales\""
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewStatements {
	options: DdlOptions,
}

impl ViewStatements {
	pub fn new(options: DdlOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> DdlOptions {
		self.options
	}

	/// `CREATE VIEW <name> AS <select>`
	pub fn create_view(&self, name: &str, select: &str) -> String {
		format!("CREATE VIEW {} AS {}", name, select)
	}

	/// `CREATE MATERIALIZED VIEW <name> AS <select> [WITH [NO] DATA]`
	pub fn create_materialized_view(&self, name: &str, select: &str) -> String {
		let mut sql = format!("CREATE MATERIALIZED VIEW {} AS {}", name, select);
		match self.options.with_data {
			Some(true) => sql.push_str(" WITH DATA"),
			Some(false) => sql.push_str(" WITH NO DATA"),
			None => {}
		}
		sql
	}

	/// `DROP VIEW [IF EXISTS] <name> [CASCADE]`
	pub fn drop_view(&self, name: &str) -> String {
		self.drop("VIEW", name)
	}

	/// `DROP MATERIALIZED VIEW [IF EXISTS] <name> [CASCADE]`
	pub fn drop_materialized_view(&self, name: &str) -> String {
		self.drop("MATERIALIZED VIEW", name)
	}

	/// `REFRESH MATERIALIZED VIEW [CONCURRENTLY] <name>`
	///
	/// `CONCURRENTLY` needs a unique index on the materialized view; that is
	/// left to the database to enforce.
	pub fn refresh_materialized_view(&self, name: &str, concurrent: bool) -> String {
		if concurrent {
			format!("REFRESH MATERIALIZED VIEW CONCURRENTLY {}", name)
		} else {
			format!("REFRESH MATERIALIZED VIEW {}", name)
		}
	}

	fn drop(&self, object: &str, name: &str) -> String {
		let if_exists = if self.options.if_exists { "IF EXISTS " } else { "" };
		let cascade = if self.options.cascade { " CASCADE" } else { "" };
		format!("DROP {} {}{}{}", object, if_exists, name, cascade)
	}
}
