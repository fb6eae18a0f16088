//! Reginald Core - a dialect-aware SQL SELECT builder
//!
//! This crate provides the core functionality for building parameterized
//! SELECT statements in a fluent manner, targeting either the PostgreSQL
//! (`$n`) or MariaDB/MySQL (`?`) placeholder convention. The builder hands
//! back a `(statement, arguments)` pair; executing it against a database is
//! the caller's concern.

pub mod builder;
pub mod dialect;
pub mod error;
pub mod value;

// Re-export main types
pub use builder::select::SelectBuilder;
pub use builder::{IntoColumns, JoinType, SortDirection};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use value::Value;

/// Create a new SELECT query builder for the given table, selecting `*`
///
/// # Examples
/// ```
/// use reginald_core::{table, Dialect};
///
/// let (sql, _args) = table(Dialect::Postgres, "users").build();
/// assert_eq!(sql, r#"SELECT * FROM "users""#);
/// ```
pub fn table(dialect: Dialect, name: &str) -> SelectBuilder {
    SelectBuilder::new(dialect, name, ())
}
