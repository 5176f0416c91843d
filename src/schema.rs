use crate::{ColumnDef, ColumnType, Record, Result, ResultSet, Value};
use anyhow::Context;

/// Label under which the describe statement reports the column name.
pub const DESCRIBE_FIELD: &str = "Field";
/// Label under which the describe statement reports the column type.
pub const DESCRIBE_TYPE: &str = "Type";

/// The immutable, ordered column descriptor list of one table.
///
/// Built exactly once from the metadata query issued while opening a
/// [`Table`](crate::Table) and never re-synchronized with the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Box<[ColumnDef]>,
}

impl Schema {
    /// Reads a describe result into a schema.
    ///
    /// Columns whose reported type has no [`ColumnType`] counterpart are
    /// dropped and logged: they stay invisible to every subsequent operation
    /// on the table.
    pub fn from_describe<R: ResultSet>(rows: &mut R) -> Result<Self> {
        let mut columns = Vec::new();
        while rows.advance()? {
            let name = rows
                .read_text(DESCRIBE_FIELD)?
                .context("Describe row is missing the column name")?;
            let reported = rows
                .read_text(DESCRIBE_TYPE)?
                .context("Describe row is missing the column type")?;
            match ColumnType::infer(&reported) {
                Some(kind) => columns.push(ColumnDef { name, kind }),
                None => log::warn!(
                    "Column {:?} has unsupported type {:?}, it will not be mapped",
                    name,
                    reported
                ),
            }
        }
        Ok(Self {
            columns: columns.into(),
        })
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Materializes the cursor's current row.
    ///
    /// The produced record has exactly the schema's columns as keys, each read
    /// through the getter matching its inferred kind. Cells the row may carry
    /// beyond the schema are never read.
    pub fn read_row<R: ResultSet>(&self, rows: &R) -> Result<Record> {
        let mut record = Record::new();
        for column in &self.columns {
            let value = match column.kind {
                ColumnType::Int => Value::Int(rows.read_int(column.name())?),
                ColumnType::Float => Value::Float(rows.read_float(column.name())?),
                ColumnType::Text => Value::Text(rows.read_text(column.name())?),
            };
            record.set(column.name(), value);
        }
        Ok(record)
    }
}
