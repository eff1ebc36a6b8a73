//! HTTP/1.x Message Parser and Header Builder
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod scan;
pub mod percent;
pub mod http;
pub mod headers;
pub mod message;

pub use message::{Message, MessageKind};
