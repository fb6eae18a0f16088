//! Query builder module

pub mod select;

pub use select::SelectBuilder;

use std::fmt::{self, Display};

/// JOIN types supported by the SELECT builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

impl Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER"),
            JoinType::Left => write!(f, "LEFT"),
            JoinType::Right => write!(f, "RIGHT"),
        }
    }
}

/// Sort direction for ORDER BY clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a caller-supplied direction, case-insensitively
    ///
    /// Anything other than ASC or DESC degrades to DESC rather than failing;
    /// sort directions often arrive from untrusted request parameters.
    pub fn parse_lenient(direction: &str) -> Self {
        match direction.to_ascii_uppercase().as_str() {
            "ASC" => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Trait to convert various types into column-name lists
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for () {
    fn into_columns(self) -> Vec<String> {
        Vec::new()
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

// For tuples
impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
        ]
    }
}

impl IntoColumns for (&str, &str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
            self.4.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_columns_implementations() {
        // Single string
        let cols = "name".into_columns();
        assert_eq!(cols, vec!["name"]);

        // Tuple
        let cols = ("name", "age").into_columns();
        assert_eq!(cols, vec!["name", "age"]);

        // Vector
        let cols = vec!["name", "age"].into_columns();
        assert_eq!(cols, vec!["name", "age"]);

        // Unit means no columns
        assert!(().into_columns().is_empty());
    }

    #[test]
    fn test_sort_direction_lenient_parse() {
        assert_eq!(SortDirection::parse_lenient("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::parse_lenient("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::parse_lenient("desc"), SortDirection::Desc);
        assert_eq!(
            SortDirection::parse_lenient("sideways"),
            SortDirection::Desc
        );
        assert_eq!(SortDirection::parse_lenient(""), SortDirection::Desc);
    }

    #[test]
    fn test_display() {
        assert_eq!(JoinType::Left.to_string(), "LEFT");
        assert_eq!(SortDirection::Asc.to_string(), "ASC");
    }
}
