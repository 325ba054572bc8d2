//! # Reinhardt DB Views
//!
//! Django-style database views and materialized views for Reinhardt schema
//! migrations.
//!
//! A model can be declared as a view over another model. The view schema
//! editor then creates, rebuilds, drops and refreshes the backing database
//! object as the model changes, and the system checks report broken
//! declarations before any DDL runs.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - [`prelude::PostgresExecutor`] over `sqlx`
//! - `sqlite` - `SqliteExecutor` over `sqlx` (plain views only)
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use reinhardt_dbviews::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let registry = EntityRegistry::new();
//! registry.register(EntityDescriptor::table("shop", "Order", "shop_order"));
//!
//! let sales = EntityDescriptor::view("reports", "Sales", "sales")
//!     .materialized(true)
//!     .base_entity("shop.Order")
//!     .field(FieldSpec::new("region", FieldType::Text))
//!     .field(FieldSpec::new("total", FieldType::Double).source(SourceExpr::aggregate("SUM(amount)")));
//!
//! for diagnostic in check_registry(&registry) {
//!     eprintln!("{}", diagnostic);
//! }
//!
//! let mut tx = pool.begin().await?;
//! let mut editor = ViewSchemaEditor::new(Arc::new(registry), PostgresExecutor::new(&mut *tx));
//! editor.create_model(&sales, None).await?;
//! editor.refresh_materialized_view(&sales, false).await?;
//! drop(editor);
//! tx.commit().await?;
//! # Ok(())
//! # }
//! ```

pub use reinhardt_dbviews_core::*;
