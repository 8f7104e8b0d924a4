mod display;
mod json;
mod read_op;
pub mod record;
mod write_op;

pub use record::DynamicRecord;

/// Build a [`DynamicRecord`] from `key => value` pairs.
///
/// ```
/// use dynamic_record::record;
///
/// let person = record! { "name" => "Alice", "age" => 21i64, "height" => 167.64f64 };
/// assert_eq!(person.to_string(), "map[age:21 height:167.64 name:Alice]");
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::DynamicRecord::new()
    };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut record = $crate::DynamicRecord::new();
        $(
            record.set($key, $val);
        )+
        record
    }};
}
