use crate::Value;

/// An open-ended row object: an ordered mapping from column name to [`Value`].
///
/// A column is in one of three states: absent (never set, left out of
/// generated INSERT/UPDATE statements entirely), null ([`Value::Null`] or a
/// typed null, written as SQL `NULL`) or holding a payload. Columns that do
/// not exist in the table schema are ignored by every
/// [`Table`](crate::Table) operation, on read and on write.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column, replacing the previous value if the column was present.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let column = column.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == column) {
            slot.1 = value;
        } else {
            self.fields.push((column, value));
        }
        self
    }

    /// Chaining variant of [`set`](Self::set).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Removes a column, making it absent again (distinct from setting null).
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let position = self.fields.iter().position(|(name, _)| name == column)?;
        Some(self.fields.remove(position).1)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut result = Record::new();
        for (column, value) in iter {
            result.set(column, value);
        }
        result
    }
}
