use silo::{Connection, Result, ResultSet, Value};
use std::{collections::VecDeque, future::Future};

/// One canned row: `(column label, cell)` pairs in result order.
pub type MockRow = Vec<(&'static str, Value)>;

/// Scripted result set replaying canned rows.
pub struct MockRows {
    rows: VecDeque<MockRow>,
    current: Option<MockRow>,
    insert_id: Option<i64>,
}

impl MockRows {
    pub fn empty() -> Self {
        Self::new(vec![], None)
    }

    pub fn new(rows: Vec<MockRow>, insert_id: Option<i64>) -> Self {
        Self {
            rows: rows.into(),
            current: None,
            insert_id,
        }
    }

    fn cell(&self, column: &str) -> Option<&Value> {
        self.current.as_ref().and_then(|row| {
            row.iter()
                .find(|(name, _)| *name == column)
                .map(|(_, value)| value)
        })
    }
}

impl ResultSet for MockRows {
    fn advance(&mut self) -> Result<bool> {
        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn read_int(&self, column: &str) -> Result<Option<i64>> {
        Ok(match self.cell(column) {
            Some(Value::Int(v)) => *v,
            _ => None,
        })
    }

    fn read_float(&self, column: &str) -> Result<Option<f64>> {
        Ok(match self.cell(column) {
            Some(Value::Float(v)) => *v,
            _ => None,
        })
    }

    fn read_text(&self, column: &str) -> Result<Option<String>> {
        Ok(match self.cell(column) {
            Some(Value::Text(v)) => v.clone(),
            _ => None,
        })
    }

    fn insert_id(&self) -> Option<i64> {
        self.insert_id
    }
}

/// Scripted connection: pops one canned result per query and records every
/// executed statement together with its bound parameters.
pub struct MockConnection {
    results: VecDeque<MockRows>,
    pub executed: Vec<(String, Vec<Value>)>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            results: VecDeque::new(),
            executed: Vec::new(),
        }
    }

    pub fn with_result(mut self, rows: MockRows) -> Self {
        self.results.push_back(rows);
        self
    }
}

impl Connection for MockConnection {
    type Rows = MockRows;

    fn query(
        &mut self,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Result<Self::Rows>> + Send {
        self.executed.push((sql.to_owned(), params.to_vec()));
        let result = self.results.pop_front().unwrap_or_else(MockRows::empty);
        async move { Ok(result) }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Canned describe result for the given `(name, reported type)` pairs.
pub fn describe(columns: &[(&str, &str)]) -> MockRows {
    MockRows::new(
        columns
            .iter()
            .map(|&(name, ty)| {
                vec![
                    ("Field", Value::Text(Some(name.to_owned()))),
                    ("Type", Value::Text(Some(ty.to_owned()))),
                ]
            })
            .collect(),
        None,
    )
}
