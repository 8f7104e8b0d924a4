use super::DynamicRecord;
use crate::value::fmt_map;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// `map[k1:v1 k2:v2]`, keys sorted.
impl fmt::Display for DynamicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_map(&self.fields, f)
    }
}

impl Serialize for DynamicRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(k, v)| (k.as_str(), v)))
    }
}
