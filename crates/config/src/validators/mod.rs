//! Configuration validators

mod schema;

pub use schema::{FieldSchema, RecordSchema};
