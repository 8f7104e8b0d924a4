use super::DynamicRecord;
use crate::error::FieldError;
use crate::narrow::Narrow;
use crate::value::{Value, ValueKind};
use smol_str::SmolStr;

impl DynamicRecord {
    // ════════════════════════════════════════════════════════════════════════
    // Untyped reads
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Runtime type tag of the stored value, `None` if unset.
    #[inline]
    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.get(key).map(Value::kind)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Typed reads (narrowing)
    // ════════════════════════════════════════════════════════════════════════

    /// Narrow the value under `key` to `T`.
    ///
    /// Returns `None` when the key is absent or holds a different kind.
    /// Use [`try_get`](Self::try_get) to tell those two cases apart.
    #[inline]
    pub fn get_typed<'a, T: Narrow<'a>>(&'a self, key: &str) -> Option<T> {
        self.get(key).and_then(T::narrow)
    }

    /// Narrow the value under `key` to `T`, reporting why it failed.
    pub fn try_get<'a, T: Narrow<'a>>(&'a self, key: &str) -> Result<T, FieldError> {
        let value = self.get(key).ok_or_else(|| FieldError::Missing {
            key: SmolStr::new(key),
        })?;
        T::narrow(value).ok_or_else(|| {
            let (expected, actual) = (T::KIND, value.kind());
            tracing::debug!(key, %expected, %actual, "narrowing failed");
            FieldError::TypeMismatch {
                key: SmolStr::new(key),
                expected,
                actual,
            }
        })
    }

    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_typed(key)
    }

    #[inline]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_typed(key)
    }

    #[inline]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get_typed(key)
    }

    #[inline]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_typed(key)
    }
}
