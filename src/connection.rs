use crate::{GenericSqlWriter, Result, SqlWriter, Value};
use std::future::Future;

/// The external collaborator executing parameterized SQL.
///
/// Implementations are expected to serialize or pipeline the statements they
/// receive; this crate never runs two queries on one connection concurrently
/// on its own. Failures are surfaced unchanged: no retry and no wrapping
/// happens above this boundary.
pub trait Connection: Send {
    type Rows: ResultSet;

    /// The writer producing this backend's SQL dialect.
    fn sql_writer(&self) -> impl SqlWriter {
        GenericSqlWriter::new()
    }

    /// Executes `sql` with `params` bound to its placeholders in order.
    fn query(
        &mut self,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Result<Self::Rows>> + Send;

    /// Blocking twin of [`query`](Self::query).
    ///
    /// Must not be called from inside an async runtime: the default
    /// implementation parks the current thread until the query resolves.
    fn query_blocking(&mut self, sql: &str, params: &[Value]) -> Result<Self::Rows> {
        futures::executor::block_on(self.query(sql, params))
    }
}

/// Cursor over the rows produced by one query.
///
/// Starts positioned before the first row; [`advance`](Self::advance) moves
/// to the next row and reports whether one is available. Cells are read by
/// column name through the typed getters, a SQL NULL cell reads as `None`.
/// Resources are released on drop.
pub trait ResultSet {
    fn advance(&mut self) -> Result<bool>;
    fn read_int(&self, column: &str) -> Result<Option<i64>>;
    fn read_float(&self, column: &str) -> Result<Option<f64>>;
    fn read_text(&self, column: &str) -> Result<Option<String>>;
    /// The identifier the database generated for the last INSERT, if any.
    fn insert_id(&self) -> Option<i64>;
}
