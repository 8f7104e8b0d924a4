use crate::error::FieldError;
use crate::record::DynamicRecord;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Statically typed counterpart of the `{name, age, height}` record.
///
/// When the set of attributes is known up front a struct is the better
/// fit: fields are checked once at conversion time and arithmetic on `age`
/// needs no narrowing afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub height: f64,
}

impl Person {
    /// Add one year to `age` and return it. `age` is left as is on overflow,
    /// the same outcome as `increment_int_field("age")` on a record.
    pub fn birthday(&mut self) -> Result<i64, FieldError> {
        self.age = self.age.checked_add(1).ok_or_else(|| FieldError::Overflow {
            key: SmolStr::new("age"),
        })?;
        Ok(self.age)
    }
}

impl TryFrom<&DynamicRecord> for Person {
    type Error = FieldError;

    fn try_from(record: &DynamicRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: record.try_get("name")?,
            age: record.try_get("age")?,
            height: record.try_get("height")?,
        })
    }
}

impl From<Person> for DynamicRecord {
    fn from(person: Person) -> Self {
        crate::record! {
            "name" => person.name,
            "age" => person.age,
            "height" => person.height,
        }
    }
}
