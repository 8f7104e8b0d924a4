pub mod error;
pub mod narrow;
pub mod person;
pub mod record;
pub mod value;

pub use error::{FieldError, RecordError};
pub use narrow::Narrow;
pub use person::Person;
pub use record::DynamicRecord;
pub use value::{FastMap, Value, ValueKind};
