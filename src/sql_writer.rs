use crate::{Value, separated_by};

/// Writes the statements executed by a [`Table`](crate::Table).
///
/// All methods append to the `out` buffer. Values never end up in the
/// statement text: a null is written inline as the `NULL` keyword, anything
/// else as a placeholder, with the value pushed onto `params` in placeholder
/// order. Identifiers always go through
/// [`write_identifier_quoted`](Self::write_identifier_quoted).
pub trait SqlWriter {
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', r#""""#);
        out.push('"');
    }

    fn write_placeholder(&self, out: &mut String) {
        out.push('?');
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL");
    }

    /// One value position inside a VALUES or SET list.
    fn write_value(&self, out: &mut String, value: &Value, params: &mut Vec<Value>) {
        if value.is_null() {
            self.write_value_none(out);
        } else {
            self.write_placeholder(out);
            params.push(value.clone());
        }
    }

    /// The metadata statement the schema is built from.
    fn write_describe(&self, out: &mut String, table: &str) {
        out.push_str("SHOW COLUMNS FROM ");
        self.write_identifier_quoted(out, table);
        out.push(';');
    }

    /// `filter` is a raw fragment supplied by the caller (e.g. `WHERE x = ?`)
    /// and is appended as-is.
    fn write_select(&self, out: &mut String, table: &str, filter: &str) {
        out.push_str("SELECT * FROM ");
        self.write_identifier_quoted(out, table);
        if !filter.is_empty() {
            out.push('\n');
            out.push_str(filter);
        }
        out.push(';');
    }

    fn write_insert(
        &self,
        out: &mut String,
        table: &str,
        columns: &[(&str, &Value)],
        params: &mut Vec<Value>,
    ) {
        out.push_str("INSERT INTO ");
        self.write_identifier_quoted(out, table);
        out.push_str(" (");
        separated_by(
            out,
            columns,
            |out, &(name, _)| self.write_identifier_quoted(out, name),
            ", ",
        );
        out.push_str(") VALUES\n(");
        separated_by(
            out,
            columns,
            |out, &(_, value)| self.write_value(out, value, params),
            ", ",
        );
        out.push_str(");");
    }

    fn write_update(
        &self,
        out: &mut String,
        table: &str,
        assignments: &[(&str, &Value)],
        identity: &str,
        identity_value: &Value,
        params: &mut Vec<Value>,
    ) {
        out.push_str("UPDATE ");
        self.write_identifier_quoted(out, table);
        out.push_str(" SET ");
        separated_by(
            out,
            assignments,
            |out, &(name, value)| {
                self.write_identifier_quoted(out, name);
                out.push_str(" = ");
                self.write_value(out, value, params);
            },
            ", ",
        );
        out.push_str("\nWHERE ");
        self.write_identifier_quoted(out, identity);
        out.push_str(" = ");
        // The identity is always bound, a null predicate value matches nothing
        self.write_placeholder(out);
        params.push(identity_value.clone());
        out.push(';');
    }

    fn write_delete(
        &self,
        out: &mut String,
        table: &str,
        identity: &str,
        identity_value: &Value,
        params: &mut Vec<Value>,
    ) {
        out.push_str("DELETE FROM ");
        self.write_identifier_quoted(out, table);
        out.push_str("\nWHERE ");
        self.write_identifier_quoted(out, identity);
        out.push_str(" = ");
        self.write_placeholder(out);
        params.push(identity_value.clone());
        out.push(';');
    }
}

pub struct GenericSqlWriter;
impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}
impl SqlWriter for GenericSqlWriter {}

/// MySQL / MariaDB dialect: identifiers are backtick quoted.
#[derive(Default)]
pub struct MySQLSqlWriter {}

impl MySQLSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for MySQLSqlWriter {
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('`');
        self.write_escaped(out, value, '`', "``");
        out.push('`');
    }
}
