#[cfg(test)]
mod tests {
    use silo::{Record, Value};

    #[test]
    fn set_and_get() {
        let mut record = Record::new();
        assert!(record.is_empty());
        record.set("name", "Ada").set("score", 3.5);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("name"), Some(&Value::Text(Some("Ada".into()))));
        assert_eq!(record.get("score"), Some(&Value::Float(Some(3.5))));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut record = Record::new().with("a", 1i64).with("b", 2i64);
        record.set("a", 10i64);
        assert_eq!(record.get("a"), Some(&Value::Int(Some(10))));
        // Replacing keeps the original position
        let columns: Vec<_> = record.iter().map(|(name, _)| name.to_owned()).collect();
        assert_eq!(columns, ["a", "b"]);
    }

    #[test]
    fn absent_is_not_null() {
        let mut record = Record::new().with("score", Value::Null);
        assert!(record.contains("score"));
        assert_eq!(record.get("score"), Some(&Value::Null));
        assert_eq!(record.remove("score"), Some(Value::Null));
        assert!(!record.contains("score"));
        assert_eq!(record.get("score"), None);
        assert_eq!(record.remove("score"), None);
    }

    #[test]
    fn preserves_insertion_order() {
        let record = Record::new()
            .with("c", 1i64)
            .with("a", 2i64)
            .with("b", 3i64);
        let columns: Vec<_> = record.iter().map(|(name, _)| name.to_owned()).collect();
        assert_eq!(columns, ["c", "a", "b"]);
    }

    #[test]
    fn from_iterator_deduplicates() {
        let record: Record = [
            ("a".to_owned(), Value::Int(Some(1))),
            ("b".to_owned(), Value::Int(Some(2))),
            ("a".to_owned(), Value::Int(Some(3))),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some(&Value::Int(Some(3))));
    }
}
