use crate::{Error, Result, Value};

/// Conversions between native Rust types and the dynamically typed [`Value`]
/// representation that backs query parameters and row cells.
///
/// `try_from_value` errors name both the offending value and the target type,
/// and reject nulls: extract through `Option<T>` when a column is nullable.
pub trait AsValue {
    fn as_value(self) -> Value;
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl AsValue for i64 {
    fn as_value(self) -> Value {
        Value::Int(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(Some(v)) => Ok(v),
            v => Err(Error::msg(format!("Cannot convert {:?} into i64", v))),
        }
    }
}

impl AsValue for i32 {
    fn as_value(self) -> Value {
        Value::Int(Some(self as i64))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(Some(v)) => i32::try_from(v)
                .map_err(|_| Error::msg(format!("Cannot convert {:?} into i32", v))),
            v => Err(Error::msg(format!("Cannot convert {:?} into i32", v))),
        }
    }
}

impl AsValue for f64 {
    fn as_value(self) -> Value {
        Value::Float(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(Some(v)) => Ok(v),
            Value::Int(Some(v)) => Ok(v as f64),
            v => Err(Error::msg(format!("Cannot convert {:?} into f64", v))),
        }
    }
}

impl AsValue for String {
    fn as_value(self) -> Value {
        Value::Text(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(Some(v)) => Ok(v),
            v => Err(Error::msg(format!("Cannot convert {:?} into String", v))),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::try_from_value(value).map(Some)
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Some(value.to_owned()))
    }
}
