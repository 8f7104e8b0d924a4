use super::DynamicRecord;
use crate::error::FieldError;
use crate::narrow::Narrow;
use crate::value::Value;
use smol_str::SmolStr;

impl DynamicRecord {
    // ════════════════════════════════════════════════════════════════════════
    // Insert / overwrite
    // ════════════════════════════════════════════════════════════════════════

    /// Insert or overwrite the value under `key`. Always succeeds.
    pub fn set(&mut self, key: impl Into<SmolStr>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        tracing::trace!(key = %key, kind = %value.kind(), "set field");
        self.fields.insert(key, value);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Read-narrow-modify-write
    // ════════════════════════════════════════════════════════════════════════

    /// Narrow the current value to `T`, compute `f(current)` and write the
    /// result back under the same key. The record is untouched on error.
    pub fn update<T, U, F>(&mut self, key: &str, f: F) -> Result<(), FieldError>
    where
        T: for<'a> Narrow<'a>,
        U: Into<Value>,
        F: FnOnce(T) -> U,
    {
        let current: T = self.try_get(key)?;
        let next = f(current);
        self.set(key, next);
        Ok(())
    }

    /// Add `delta` to an integer field and return the new value.
    ///
    /// Fails with `Missing` or `TypeMismatch` before any arithmetic happens,
    /// and with `Overflow` if the sum does not fit in an `i64`.
    pub fn add_int_field(&mut self, key: &str, delta: i64) -> Result<i64, FieldError> {
        let current: i64 = self.try_get(key)?;
        let next = current
            .checked_add(delta)
            .ok_or_else(|| FieldError::Overflow {
                key: SmolStr::new(key),
            })?;
        self.set(key, next);
        Ok(next)
    }

    /// `add_int_field(key, 1)`.
    #[inline]
    pub fn increment_int_field(&mut self, key: &str) -> Result<i64, FieldError> {
        self.add_int_field(key, 1)
    }
}
