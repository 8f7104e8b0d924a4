use crate::value::{FastMap, Value};
use smol_str::SmolStr;

// ─── DynamicRecord ─────────────────────────────────────────────────────────
/// A string-keyed record of heterogeneously typed values.
///
/// Keys are unique and kept in sorted order. A present key always holds a
/// [`Value`]; an absent key means the attribute is unset. Fields are never
/// removed, only inserted or overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicRecord {
    pub(crate) fields: FastMap<SmolStr, Value>,
}

impl DynamicRecord {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(SmolStr::as_str)
    }

    /// Fields in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<FastMap<SmolStr, Value>> for DynamicRecord {
    fn from(fields: FastMap<SmolStr, Value>) -> Self {
        Self { fields }
    }
}

impl From<DynamicRecord> for Value {
    fn from(record: DynamicRecord) -> Self {
        Value::Object(record.fields)
    }
}

impl<K: Into<SmolStr>, V: Into<Value>> FromIterator<(K, V)> for DynamicRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl<K: Into<SmolStr>, V: Into<Value>> Extend<(K, V)> for DynamicRecord {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
