use super::DynamicRecord;
use crate::error::RecordError;
use crate::value::Value;

impl DynamicRecord {
    /// Parse a JSON object into a record. Integers that fit in an `i64`
    /// become `Int`, every other number becomes `Float`.
    pub fn from_json_str(s: &str) -> Result<Self, RecordError> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Self::try_from(json)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                .collect(),
        )
    }
}

impl TryFrom<serde_json::Value> for DynamicRecord {
    type Error = RecordError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(json) {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotObject(other.kind())),
        }
    }
}
