//! Record identity shared by every table row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a record: text for workshop entities, integers for users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

/// Anything that can be shown as one table row.
///
/// Fields are looked up by key on the record's serde representation, so a
/// column key is simply the serialized field name.
pub trait Record: Serialize {
    fn record_id(&self) -> RecordId;

    /// Serialized view of the record used for raw column lookups
    fn to_fields(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            log::debug!("record {} could not be serialized: {}", self.record_id(), e);
            serde_json::Value::Null
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Plate {
        id: String,
        plate: String,
    }

    impl Record for Plate {
        fn record_id(&self) -> RecordId {
            self.id.as_str().into()
        }
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::from(7).to_string(), "7");
        assert_eq!(RecordId::from("34 ABC 123").to_string(), "34 ABC 123");
    }

    #[test]
    fn test_to_fields_exposes_serialized_keys() {
        let record = Plate {
            id: "1".to_string(),
            plate: "06 XYZ 456".to_string(),
        };
        let fields = record.to_fields();
        assert_eq!(fields["plate"], "06 XYZ 456");
        assert!(fields.get("missing").is_none());
    }
}
