//! HTTP/1.x message.
//!
//! A [`Message`] is created for a single request/response cycle in one of two roles:
//!
//! - [`Message::for_parsing`] wraps a received header block, [`Message::parse`] then fills the
//!   request line components and the [`FieldTable`].
//! - [`Message::for_building`] fixes the message kind, the `begin_*` and `append_*` operations then
//!   write an outgoing header block into an owned buffer.
//!
//! Parsed components borrow the input buffer, except the decoded request path and the query
//! string which are owned by the message.
use bytes::BytesMut;
use std::time::SystemTime;

use crate::headers::{FieldTable, HeaderKind};
use crate::http::{Method, Version, parse_httpdate};

mod error;
mod parse;
mod build;

#[cfg(test)]
mod test;

pub use error::{BuildError, ParseError};
pub use build::MIN_HEADER_CAPACITY;
pub use parse::SCHEME_LEN;

/// Kind of an HTTP message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// No request line or status line recognized yet.
    #[default]
    Unclassified,
    Request,
    Response,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Parse,
    Build,
}

/// HTTP/1.x message, see [module level documentation] for more details.
///
/// [module level documentation]: crate::message
#[derive(Debug)]
pub struct Message<'a> {
    identity: &'a [u8],
    role: Role,
    input: &'a [u8],

    kind: MessageKind,
    method: Option<Method>,
    version: Option<Version>,
    status_code: u16,
    request_line: &'a [u8],
    absolute_uri: &'a [u8],
    relative_uri: &'a [u8],
    scheme: Option<&'a [u8]>,
    host: Option<&'a [u8]>,
    request_path: Option<Box<[u8]>>,
    query_string: Option<Box<[u8]>>,
    keep_alive: bool,
    fields: FieldTable<'a>,

    output: Option<BytesMut>,
}

impl<'a> Message<'a> {
    /// Create a message for parsing `input`.
    ///
    /// `identity` is the `Server`/`User-Agent` string. `input` must contain the complete header
    /// block including the terminating empty line.
    pub fn for_parsing(identity: &'a [u8], input: &'a [u8]) -> Self {
        Self::new(identity, Role::Parse, input, MessageKind::Unclassified, 200)
    }

    /// Create a message for building a header of the given `kind`.
    ///
    /// `identity` is written as the `Server` header of a response or the `User-Agent` header of a
    /// request.
    pub fn for_building(identity: &'a [u8], kind: MessageKind) -> Self {
        Self::new(identity, Role::Build, &[], kind, 0)
    }

    fn new(identity: &'a [u8], role: Role, input: &'a [u8], kind: MessageKind, status_code: u16) -> Self {
        Self {
            identity,
            role,
            input,
            kind,
            method: None,
            version: None,
            status_code,
            request_line: &[],
            absolute_uri: &[],
            relative_uri: &[],
            scheme: None,
            host: None,
            request_path: None,
            query_string: None,
            keep_alive: false,
            fields: FieldTable::new(),
            output: None,
        }
    }

    // ===== Accessors =====

    #[inline]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the request method, `None` if unrecognized or not parsed.
    #[inline]
    pub const fn method(&self) -> Option<Method> {
        self.method
    }

    /// Returns the request or status line version, `None` if unrecognized or not parsed.
    #[inline]
    pub const fn version(&self) -> Option<Version> {
        self.version
    }

    /// Returns the status code.
    ///
    /// A parsing message starts at `200`, a building message at `0`. A failed parse sets it to
    /// `400`, a parsed status line sets it to the received code.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the first line of the input, without its end of line.
    #[inline]
    pub const fn request_line(&self) -> &'a [u8] {
        self.request_line
    }

    /// Returns the raw request target, excluding the query.
    #[inline]
    pub const fn absolute_uri(&self) -> &'a [u8] {
        self.absolute_uri
    }

    /// Returns the request target after the scheme and host, excluding the query.
    #[inline]
    pub const fn relative_uri(&self) -> &'a [u8] {
        self.relative_uri
    }

    /// Returns the scheme prefix of an absolute-form request target.
    #[inline]
    pub const fn scheme(&self) -> Option<&'a [u8]> {
        self.scheme
    }

    /// Returns the host of an absolute-form request target.
    #[inline]
    pub const fn host(&self) -> Option<&'a [u8]> {
        self.host
    }

    /// Returns the percent decoded request path, without its leading `/`.
    #[inline]
    pub fn request_path(&self) -> Option<&[u8]> {
        self.request_path.as_deref()
    }

    /// Returns the raw query string, without the leading `?`.
    #[inline]
    pub fn query_string(&self) -> Option<&[u8]> {
        self.query_string.as_deref()
    }

    /// Returns `true` if an explicit `Connection: keep-alive` was received.
    #[inline]
    pub const fn keep_alive(&self) -> bool {
        self.keep_alive
    }

    /// Returns the value of a recognized header.
    #[inline]
    pub fn header(&self, kind: HeaderKind) -> Option<&'a [u8]> {
        self.fields.get(kind)
    }

    #[inline]
    pub const fn fields(&self) -> &FieldTable<'a> {
        &self.fields
    }

    /// Parse the `If-Modified-Since` header as an IMF-fixdate.
    pub fn if_modified_since(&self) -> Option<SystemTime> {
        parse_httpdate(self.header(HeaderKind::IfModifiedSince)?)
    }
}
