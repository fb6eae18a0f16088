//! SQL dialects: identifier quoting and placeholder conventions

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// The SQL dialect a statement is built for
///
/// Chosen at builder construction and never changed afterwards. The dialect
/// determines the identifier quote character and the placeholder style of
/// the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// PostgreSQL: `"identifier"` quoting, positional `$1, $2, ...` placeholders
    Postgres,
    /// MariaDB / MySQL: `` `identifier` `` quoting, fixed `?` placeholders
    MariaDb,
}

impl Dialect {
    /// The identifier quote character for this dialect
    pub fn quote_char(self) -> char {
        match self {
            Dialect::Postgres => '"',
            Dialect::MariaDb => '`',
        }
    }

    /// Quote a table or column name, doubling any embedded quote character
    /// so the name cannot break out of its quoting
    ///
    /// The wildcard `*` passes through unquoted. No other validation is
    /// performed; names are expected to come from code-level configuration,
    /// not end-user text.
    pub fn escape_identifier(self, name: &str) -> String {
        if name == "*" {
            return name.to_string();
        }
        let quote = self.quote_char();
        let mut escaped = String::with_capacity(name.len() + 2);
        escaped.push(quote);
        for ch in name.chars() {
            if ch == quote {
                escaped.push(quote);
            }
            escaped.push(ch);
        }
        escaped.push(quote);
        escaped
    }

    /// Rewrite `?` placeholder tokens in raw condition text into this
    /// dialect's wire form, numbering from `start_idx`
    ///
    /// For MariaDB the text is returned unchanged, `?` already being its
    /// wire form. For PostgreSQL every `?` becomes the next `$N`. This is a
    /// plain textual substitution, not SQL-aware parsing: a literal `?`
    /// inside a quoted string in `condition` gets rewritten too, so callers
    /// must keep the placeholder character out of literal text.
    pub fn rewrite_placeholders(self, condition: &str, start_idx: usize) -> String {
        if self == Dialect::MariaDb {
            return condition.to_string();
        }
        let mut result = String::with_capacity(condition.len());
        let mut next = start_idx;
        for ch in condition.chars() {
            if ch == '?' {
                result.push_str(&format!("${}", next));
                next += 1;
            } else {
                result.push(ch);
            }
        }
        result
    }

    /// Generate a comma-joined list of `count` placeholders starting at
    /// `start_idx`: `$3, $4, $5` for PostgreSQL, `?, ?, ?` for MariaDB
    ///
    /// MariaDB placeholders carry no explicit numbering; each `?` is bound
    /// positionally by the execution layer.
    pub fn placeholder_list(self, start_idx: usize, count: usize) -> String {
        let placeholders: Vec<String> = (0..count)
            .map(|i| match self {
                Dialect::Postgres => format!("${}", start_idx + i),
                Dialect::MariaDb => "?".to_string(),
            })
            .collect();
        placeholders.join(", ")
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::MariaDb => write!(f, "mariadb"),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mariadb" | "mysql" => Ok(Dialect::MariaDb),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_identifier_postgres() {
        assert_eq!(Dialect::Postgres.escape_identifier("users"), r#""users""#);
    }

    #[test]
    fn test_escape_identifier_mariadb() {
        assert_eq!(Dialect::MariaDb.escape_identifier("users"), "`users`");
    }

    #[test]
    fn test_escape_wildcard_passthrough() {
        assert_eq!(Dialect::Postgres.escape_identifier("*"), "*");
        assert_eq!(Dialect::MariaDb.escape_identifier("*"), "*");
    }

    #[test]
    fn test_escape_doubles_embedded_quote_once() {
        assert_eq!(
            Dialect::Postgres.escape_identifier(r#"na"me"#),
            r#""na""me""#
        );
        assert_eq!(Dialect::MariaDb.escape_identifier("na`me"), "`na``me`");
    }

    #[test]
    fn test_escape_ignores_other_dialects_quote() {
        // A backtick is just a character to PostgreSQL, and vice versa
        assert_eq!(Dialect::Postgres.escape_identifier("a`b"), r#""a`b""#);
        assert_eq!(Dialect::MariaDb.escape_identifier(r#"a"b"#), "`a\"b`");
    }

    #[test]
    fn test_rewrite_placeholders_postgres() {
        assert_eq!(
            Dialect::Postgres.rewrite_placeholders("id = ? AND name = ?", 1),
            "id = $1 AND name = $2"
        );
    }

    #[test]
    fn test_rewrite_placeholders_starts_at_index() {
        assert_eq!(
            Dialect::Postgres.rewrite_placeholders("age > ?", 4),
            "age > $4"
        );
    }

    #[test]
    fn test_rewrite_placeholders_mariadb_passthrough() {
        assert_eq!(
            Dialect::MariaDb.rewrite_placeholders("id = ? AND name = ?", 1),
            "id = ? AND name = ?"
        );
    }

    #[test]
    fn test_rewrite_no_placeholders() {
        assert_eq!(
            Dialect::Postgres.rewrite_placeholders("deleted_at IS NULL", 1),
            "deleted_at IS NULL"
        );
    }

    #[test]
    fn test_placeholder_list_postgres() {
        assert_eq!(Dialect::Postgres.placeholder_list(1, 3), "$1, $2, $3");
        assert_eq!(Dialect::Postgres.placeholder_list(4, 2), "$4, $5");
    }

    #[test]
    fn test_placeholder_list_mariadb() {
        assert_eq!(Dialect::MariaDb.placeholder_list(1, 3), "?, ?, ?");
    }

    #[test]
    fn test_placeholder_list_empty() {
        assert_eq!(Dialect::Postgres.placeholder_list(1, 0), "");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("mariadb".parse::<Dialect>().unwrap(), Dialect::MariaDb);
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MariaDb);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown dialect: 'oracle'");
    }

    #[test]
    fn test_display_round_trip() {
        for dialect in [Dialect::Postgres, Dialect::MariaDb] {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }
}
