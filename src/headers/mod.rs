//! Well-known header fields.
mod kind;
mod table;

pub use kind::HeaderKind;
pub use table::{FieldTable, Iter};
