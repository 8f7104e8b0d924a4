use crate::value::{FastMap, Value, ValueKind};
use smol_str::SmolStr;

/// Strict conversion from a stored [`Value`] into a concrete Rust type.
///
/// `narrow` succeeds only when the value's kind equals [`Narrow::KIND`].
/// There is no coercion: an `Int` does not narrow to `f64`, and the string
/// `"21"` does not narrow to `i64`.
///
/// Borrowed targets (`&str`, `&[Value]`, object maps) tie their lifetime to
/// the record they were read from. Owned targets (`i64`, `f64`, `bool`,
/// `String`, `SmolStr`) implement `Narrow<'a>` for every `'a`, which is what
/// [`DynamicRecord::update`](crate::DynamicRecord::update) requires.
pub trait Narrow<'a>: Sized {
    const KIND: ValueKind;

    fn narrow(value: &'a Value) -> Option<Self>;
}

impl<'a> Narrow<'a> for i64 {
    const KIND: ValueKind = ValueKind::Int;

    #[inline]
    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> Narrow<'a> for f64 {
    const KIND: ValueKind = ValueKind::Float;

    #[inline]
    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> Narrow<'a> for bool {
    const KIND: ValueKind = ValueKind::Bool;

    #[inline]
    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> Narrow<'a> for &'a str {
    const KIND: ValueKind = ValueKind::Str;

    #[inline]
    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> Narrow<'a> for String {
    const KIND: ValueKind = ValueKind::Str;

    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl<'a> Narrow<'a> for SmolStr {
    const KIND: ValueKind = ValueKind::Str;

    fn narrow(value: &'a Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl<'a> Narrow<'a> for &'a [Value] {
    const KIND: ValueKind = ValueKind::Array;

    #[inline]
    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

impl<'a> Narrow<'a> for &'a FastMap<SmolStr, Value> {
    const KIND: ValueKind = ValueKind::Object;

    #[inline]
    fn narrow(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}
