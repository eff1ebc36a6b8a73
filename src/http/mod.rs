//! HTTP Protocol.
mod method;
mod status;
mod version;
pub mod date;

pub use method::{Method, UnknownMethod};
pub use version::Version;
pub use status::StatusCode;
pub use date::{httpdate, httpdate_now, parse_httpdate};
