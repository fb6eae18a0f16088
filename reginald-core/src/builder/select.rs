//! SELECT statement builder and assembly

use super::{IntoColumns, JoinType, SortDirection};
use crate::{Dialect, Value};

/// Dialect-aware SELECT statement builder
///
/// Accumulates clause fragments through chained calls and assembles them
/// once with [`build`](SelectBuilder::build), producing the statement text
/// and the ordered bound arguments for the execution layer.
///
/// Identifiers handed to the builder are escaped per dialect; raw condition
/// text (WHERE/HAVING conditions, join ON text, aggregate function names)
/// is embedded verbatim and must come from trusted code.
///
/// # Examples
/// ```
/// use reginald_core::{Dialect, SelectBuilder, Value};
///
/// let (sql, args) = SelectBuilder::new(Dialect::Postgres, "users", ("id", "name"))
///     .where_("age > ?", [18])
///     .order_by("id", "ASC", None)
///     .build();
///
/// assert_eq!(
///     sql,
///     r#"SELECT "id", "name" FROM "users" WHERE age > $1 ORDER BY "id" ASC"#
/// );
/// assert_eq!(args, vec![Value::I32(18)]);
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    dialect: Dialect,
    table: String,
    columns: Vec<String>,
    joins: Vec<String>,
    conditions: Vec<String>,
    group_by: Vec<String>,
    having: Vec<String>,
    order_by: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    args: Vec<Value>,
    distinct: bool,
}

impl SelectBuilder {
    /// Create a new SELECT query builder for the given table and columns
    ///
    /// The table name and every column are escaped, except the wildcard `*`
    /// which passes through. An empty column set selects `*`.
    pub fn new<C>(dialect: Dialect, table: &str, columns: C) -> Self
    where
        C: IntoColumns,
    {
        let mut safe_columns: Vec<String> = columns
            .into_columns()
            .iter()
            .map(|col| dialect.escape_identifier(col))
            .collect();
        if safe_columns.is_empty() {
            safe_columns.push("*".to_string());
        }

        Self {
            dialect,
            table: dialect.escape_identifier(table),
            columns: safe_columns,
            joins: Vec::new(),
            conditions: Vec::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
            args: Vec::new(),
            distinct: false,
        }
    }

    /// Mark the query as DISTINCT
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Append an aggregate expression such as `COUNT("id")` to the column list
    ///
    /// The column is escaped (`*` passes through, so `aggregate("COUNT", "*")`
    /// yields `COUNT(*)`). The function name is embedded verbatim with no
    /// validation and must come from trusted code, never user input.
    pub fn aggregate(mut self, function: &str, column: &str) -> Self {
        let safe_col = self.dialect.escape_identifier(column);
        self.columns.push(format!("{}({})", function, safe_col));
        self
    }

    fn join(mut self, join_type: JoinType, table: &str, on_condition: &str) -> Self {
        let safe_table = self.dialect.escape_identifier(table);
        self.joins
            .push(format!("{} JOIN {} ON {}", join_type, safe_table, on_condition));
        self
    }

    /// Add a LEFT JOIN clause
    ///
    /// The joined table name is escaped; the ON text is embedded verbatim
    /// and never parameter-bound. Joins are emitted in call order.
    pub fn left_join(self, table: &str, on_condition: &str) -> Self {
        self.join(JoinType::Left, table, on_condition)
    }

    /// Add an INNER JOIN clause
    pub fn inner_join(self, table: &str, on_condition: &str) -> Self {
        self.join(JoinType::Inner, table, on_condition)
    }

    /// Add a RIGHT JOIN clause
    pub fn right_join(self, table: &str, on_condition: &str) -> Self {
        self.join(JoinType::Right, table, on_condition)
    }

    /// Add a WHERE condition with `?` placeholders for the given arguments
    ///
    /// Placeholders in `condition` are rewritten to the dialect's wire form,
    /// numbered after the arguments already bound, and `args` are appended
    /// in the order given. Conditions accumulate in call order and are
    /// joined with AND at assembly.
    pub fn where_<A>(mut self, condition: &str, args: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        let rewritten = self
            .dialect
            .rewrite_placeholders(condition, self.args.len() + 1);
        self.conditions.push(rewritten);
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add a `column IN (...)` condition with one placeholder per value
    pub fn where_in<V>(mut self, column: &str, values: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<Value>,
    {
        let safe_col = self.dialect.escape_identifier(column);
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let placeholders = self
            .dialect
            .placeholder_list(self.args.len() + 1, values.len());
        self.conditions
            .push(format!("{} IN ({})", safe_col, placeholders));
        self.args.extend(values);
        self
    }

    /// Add a `column BETWEEN ... AND ...` condition
    ///
    /// Binds `start` then `end`, in that order; BETWEEN is not symmetric.
    pub fn where_between(
        mut self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        let safe_col = self.dialect.escape_identifier(column);
        let first = self.args.len() + 1;
        self.conditions.push(format!(
            "{} BETWEEN {} AND {}",
            safe_col,
            self.dialect.placeholder_list(first, 1),
            self.dialect.placeholder_list(first + 1, 1),
        ));
        self.args.push(start.into());
        self.args.push(end.into());
        self
    }

    /// Append GROUP BY columns, escaped, in call order
    pub fn group_by<C>(mut self, columns: C) -> Self
    where
        C: IntoColumns,
    {
        for col in columns.into_columns() {
            self.group_by.push(self.dialect.escape_identifier(&col));
        }
        self
    }

    /// Add a HAVING condition; same placeholder contract as
    /// [`where_`](SelectBuilder::where_)
    pub fn having<A>(mut self, condition: &str, args: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        let rewritten = self
            .dialect
            .rewrite_placeholders(condition, self.args.len() + 1);
        self.having.push(rewritten);
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the ORDER BY clause; calling this again replaces the previous one
    ///
    /// `direction` is case-normalized, degrading to DESC when it is neither
    /// ASC nor DESC. When `allowed` is given and does not contain `column`,
    /// the sort column degrades to `id` — the safety valve for
    /// caller-provided dynamic sort fields.
    pub fn order_by(mut self, column: &str, direction: &str, allowed: Option<&[&str]>) -> Self {
        let direction = SortDirection::parse_lenient(direction);
        let column = match allowed {
            Some(allowed) if !allowed.contains(&column) => "id",
            _ => column,
        };
        let safe_col = self.dialect.escape_identifier(column);
        self.order_by = Some(format!("{} {}", safe_col, direction));
        self
    }

    /// Set the LIMIT value; values of zero or below are stored but omitted
    /// at assembly
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the OFFSET value; values of zero or below are stored but omitted
    /// at assembly
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Assemble the statement, consuming the builder
    ///
    /// Clause order is fixed: `SELECT [DISTINCT] columns FROM table`, joins,
    /// WHERE (AND-joined), GROUP BY, HAVING (AND-joined), ORDER BY, LIMIT,
    /// OFFSET. A positive limit and offset each become one more placeholder
    /// in the dialect's own style, with their values appended to the
    /// arguments in LIMIT-then-OFFSET order.
    pub fn build(mut self) -> (String, Vec<Value>) {
        let mut sql = String::new();

        sql.push_str("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.columns.join(", "));

        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        if !self.joins.is_empty() {
            sql.push(' ');
            sql.push_str(&self.joins.join(" "));
        }

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        if !self.having.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&self.having.join(" AND "));
        }

        if let Some(order_by) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            sql.push_str(" LIMIT ");
            sql.push_str(&self.dialect.placeholder_list(self.args.len() + 1, 1));
            self.args.push(Value::I64(limit));
        }

        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            sql.push_str(" OFFSET ");
            sql.push_str(&self.dialect.placeholder_list(self.args.len() + 1, 1));
            self.args.push(Value::I64(offset));
        }

        (sql, self.args)
    }
}
