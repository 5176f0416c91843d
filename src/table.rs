use crate::{Connection, Error, Record, Result, ResultSet, Schema, SqlWriter, Value, truncate_long};

/// Name of the identity column unless one is designated explicitly.
pub const DEFAULT_IDENTITY: &str = "id";

/// Typed CRUD access to a single table.
///
/// Opening a table runs the column introspection to completion, so every
/// method on the returned value operates against a fully loaded [`Schema`].
/// The table owns its connection and holds no per-request state.
pub struct Table<C: Connection> {
    connection: C,
    name: String,
    identity: String,
    auto_increment: bool,
    schema: Schema,
}

impl<C: Connection> Table<C> {
    /// Opens `table` with the default identity column (`"id"`, auto-generated).
    pub async fn open(connection: C, table: impl Into<String>) -> Result<Self> {
        Self::open_with_identity(connection, table, DEFAULT_IDENTITY, true).await
    }

    /// Opens `table` designating `identity` as the row-addressing column.
    ///
    /// With `auto_increment` the identity column is left out of INSERT
    /// statements and the database-generated id is written back onto the
    /// inserted record.
    pub async fn open_with_identity(
        mut connection: C,
        table: impl Into<String>,
        identity: impl Into<String>,
        auto_increment: bool,
    ) -> Result<Self> {
        let name = table.into();
        let sql = describe_sql(&connection, &name);
        log::debug!("{}", truncate_long!(sql));
        let mut rows = connection.query(&sql, &[]).await?;
        let schema = Schema::from_describe(&mut rows)?;
        Ok(Self {
            connection,
            name,
            identity: identity.into(),
            auto_increment,
            schema,
        })
    }

    /// Blocking twin of [`open`](Self::open).
    pub fn open_blocking(connection: C, table: impl Into<String>) -> Result<Self> {
        Self::open_with_identity_blocking(connection, table, DEFAULT_IDENTITY, true)
    }

    /// Blocking twin of [`open_with_identity`](Self::open_with_identity).
    pub fn open_with_identity_blocking(
        mut connection: C,
        table: impl Into<String>,
        identity: impl Into<String>,
        auto_increment: bool,
    ) -> Result<Self> {
        let name = table.into();
        let sql = describe_sql(&connection, &name);
        log::debug!("{}", truncate_long!(sql));
        let mut rows = connection.query_blocking(&sql, &[])?;
        let schema = Schema::from_describe(&mut rows)?;
        Ok(Self {
            connection,
            name,
            identity: identity.into(),
            auto_increment,
            schema,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The schema introspected when the table was opened.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Releases the underlying connection.
    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Fetches every row matched by `filter`, a raw SQL fragment appended to
    /// `SELECT * FROM <table>` (e.g. `WHERE name = ?`), with `params` bound to
    /// its placeholders in order.
    ///
    /// The fragment crosses this API unvalidated: it is trusted exactly like
    /// the rest of the caller's SQL-adjacent input.
    pub async fn find(&mut self, filter: &str, params: &[Value]) -> Result<Vec<Record>> {
        let sql = self.select_sql(filter);
        log::debug!("{}", truncate_long!(sql));
        let mut rows = self.connection.query(&sql, params).await?;
        self.collect_rows(&mut rows)
    }

    /// Blocking twin of [`find`](Self::find).
    pub fn find_blocking(&mut self, filter: &str, params: &[Value]) -> Result<Vec<Record>> {
        let sql = self.select_sql(filter);
        log::debug!("{}", truncate_long!(sql));
        let mut rows = self.connection.query_blocking(&sql, params)?;
        self.collect_rows(&mut rows)
    }

    /// Inserts `record`, listing only the schema columns present on it.
    ///
    /// Null columns are written as literal `NULL`, absent columns are omitted
    /// entirely. With auto-increment the identity column is left out and, on
    /// success, set on the record from the database-reported generated id.
    pub async fn insert(&mut self, record: &mut Record) -> Result<()> {
        let (sql, params) = self.insert_statement(record)?;
        log::debug!("{}", truncate_long!(sql));
        let rows = self.connection.query(&sql, &params).await?;
        self.store_insert_id(record, &rows);
        Ok(())
    }

    /// Blocking twin of [`insert`](Self::insert).
    pub fn insert_blocking(&mut self, record: &mut Record) -> Result<()> {
        let (sql, params) = self.insert_statement(record)?;
        log::debug!("{}", truncate_long!(sql));
        let rows = self.connection.query_blocking(&sql, &params)?;
        self.store_insert_id(record, &rows);
        Ok(())
    }

    /// Updates the row addressed by the record's identity value, assigning
    /// every schema column present on the record except the identity itself.
    ///
    /// A record whose identity is absent or null matches no row.
    pub async fn update(&mut self, record: &Record) -> Result<()> {
        let (sql, params) = self.update_statement(record)?;
        log::debug!("{}", truncate_long!(sql));
        self.connection.query(&sql, &params).await?;
        Ok(())
    }

    /// Blocking twin of [`update`](Self::update).
    pub fn update_blocking(&mut self, record: &Record) -> Result<()> {
        let (sql, params) = self.update_statement(record)?;
        log::debug!("{}", truncate_long!(sql));
        self.connection.query_blocking(&sql, &params)?;
        Ok(())
    }

    /// Deletes the row addressed by the record's identity value.
    pub async fn delete(&mut self, record: &Record) -> Result<()> {
        let (sql, params) = self.delete_statement(record);
        log::debug!("{}", truncate_long!(sql));
        self.connection.query(&sql, &params).await?;
        Ok(())
    }

    /// Blocking twin of [`delete`](Self::delete).
    pub fn delete_blocking(&mut self, record: &Record) -> Result<()> {
        let (sql, params) = self.delete_statement(record);
        log::debug!("{}", truncate_long!(sql));
        self.connection.query_blocking(&sql, &params)?;
        Ok(())
    }

    fn select_sql(&self, filter: &str) -> String {
        let mut sql = String::with_capacity(128);
        self.connection
            .sql_writer()
            .write_select(&mut sql, &self.name, filter);
        sql
    }

    fn insert_statement(&self, record: &Record) -> Result<(String, Vec<Value>)> {
        let columns = self.writable_columns(record, self.auto_increment);
        if columns.is_empty() {
            return Err(Error::msg(format!(
                "Record has none of the columns of table {:?}, refusing to insert it",
                self.name
            )));
        }
        let mut sql = String::with_capacity(128);
        let mut params = Vec::with_capacity(columns.len());
        self.connection
            .sql_writer()
            .write_insert(&mut sql, &self.name, &columns, &mut params);
        Ok((sql, params))
    }

    fn update_statement(&self, record: &Record) -> Result<(String, Vec<Value>)> {
        let assignments = self.writable_columns(record, true);
        if assignments.is_empty() {
            return Err(Error::msg(format!(
                "Record has none of the assignable columns of table {:?}, refusing to update it",
                self.name
            )));
        }
        let identity_value = self.identity_value(record);
        let mut sql = String::with_capacity(128);
        let mut params = Vec::with_capacity(assignments.len() + 1);
        self.connection.sql_writer().write_update(
            &mut sql,
            &self.name,
            &assignments,
            &self.identity,
            &identity_value,
            &mut params,
        );
        Ok((sql, params))
    }

    fn delete_statement(&self, record: &Record) -> (String, Vec<Value>) {
        let identity_value = self.identity_value(record);
        let mut sql = String::with_capacity(64);
        let mut params = Vec::with_capacity(1);
        self.connection.sql_writer().write_delete(
            &mut sql,
            &self.name,
            &self.identity,
            &identity_value,
            &mut params,
        );
        (sql, params)
    }

    /// Schema columns present on `record`, in schema order.
    fn writable_columns<'a>(
        &'a self,
        record: &'a Record,
        skip_identity: bool,
    ) -> Vec<(&'a str, &'a Value)> {
        self.schema
            .columns()
            .iter()
            .filter(|column| !(skip_identity && column.name == self.identity))
            .filter_map(|column| record.get(column.name()).map(|value| (column.name(), value)))
            .collect()
    }

    fn identity_value(&self, record: &Record) -> Value {
        record.get(&self.identity).cloned().unwrap_or(Value::Null)
    }

    fn store_insert_id(&self, record: &mut Record, rows: &C::Rows) {
        if self.auto_increment {
            if let Some(id) = rows.insert_id() {
                record.set(self.identity.as_str(), Value::Int(Some(id)));
            }
        }
    }

    fn collect_rows(&self, rows: &mut C::Rows) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while rows.advance()? {
            records.push(self.schema.read_row(rows)?);
        }
        Ok(records)
    }
}

fn describe_sql<C: Connection>(connection: &C, table: &str) -> String {
    let mut sql = String::with_capacity(64);
    connection.sql_writer().write_describe(&mut sql, table);
    sql
}
