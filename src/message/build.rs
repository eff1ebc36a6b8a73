//! Header block builder.
use bytes::BytesMut;

use super::{BuildError, Message, MessageKind, Role};
use crate::headers::HeaderKind;
use crate::http::{Method, StatusCode, Version, date};
use crate::log::warning;

/// Initial capacity of the output buffer, it grows on demand.
pub const MIN_HEADER_CAPACITY: usize = 512;

const COLON_SPACE: &[u8] = b": ";
const CRLF: &[u8] = b"\r\n";
const CLOSE: &[u8] = b"close";
const KEEP_ALIVE: &[u8] = b"keep-alive";
const ALLOW_ALL: &[u8] = b"*";

impl Message<'_> {
    /// Start a response header block.
    ///
    /// Writes the status line followed by `Server` and `Access-Control-Allow-Origin: *`. Any
    /// previously built header block is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidRole`] unless the message was created for building a response.
    pub fn begin_response(&mut self, status: StatusCode, version: Version) -> Result<(), BuildError> {
        self.check_role(MessageKind::Response)?;

        let mut buf = BytesMut::with_capacity(MIN_HEADER_CAPACITY);
        buf.extend_from_slice(version.as_str().as_bytes());
        buf.extend_from_slice(b" ");
        buf.extend_from_slice(status.status_str().as_bytes());
        buf.extend_from_slice(b" ");
        buf.extend_from_slice(status.message().as_bytes());
        buf.extend_from_slice(CRLF);
        self.output = Some(buf);

        let identity = self.identity;
        self.append_header(HeaderKind::Server, identity)?;
        self.append_header(HeaderKind::AccessControlAllowOrigin, ALLOW_ALL)
    }

    /// Start a request header block.
    ///
    /// Writes `<method> / <version>` followed by `User-Agent`. The request target is always `/`.
    /// Any previously built header block is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidRole`] unless the message was created for building a request.
    pub fn begin_request(&mut self, method: Method, version: Version) -> Result<(), BuildError> {
        self.check_role(MessageKind::Request)?;

        let mut buf = BytesMut::with_capacity(MIN_HEADER_CAPACITY);
        buf.extend_from_slice(method.as_str().as_bytes());
        buf.extend_from_slice(b" / ");
        buf.extend_from_slice(version.as_str().as_bytes());
        buf.extend_from_slice(CRLF);
        self.output = Some(buf);

        let identity = self.identity;
        self.append_header(HeaderKind::UserAgent, identity)
    }

    fn check_role(&self, kind: MessageKind) -> Result<(), BuildError> {
        if self.role != Role::Build || self.kind != kind {
            warning!("cannot build {kind:?} header on a {:?} {:?} message", self.role, self.kind);
            return Err(BuildError::InvalidRole);
        }
        Ok(())
    }

    fn output_mut(&mut self) -> Result<&mut BytesMut, BuildError> {
        self.output.as_mut().ok_or(BuildError::NotStarted)
    }

    // ===== Append =====

    /// Append `<name>: <value>`.
    pub fn append_header(&mut self, kind: HeaderKind, value: &[u8]) -> Result<(), BuildError> {
        let buf = self.output_mut()?;
        buf.extend_from_slice(kind.as_str().as_bytes());
        buf.extend_from_slice(COLON_SPACE);
        buf.extend_from_slice(value);
        buf.extend_from_slice(CRLF);
        Ok(())
    }

    /// Append `Content-Length` in decimal.
    pub fn append_content_length(&mut self, len: impl Into<u64>) -> Result<(), BuildError> {
        let mut itoa = itoa::Buffer::new();
        let len = itoa.format(len.into());
        self.append_header(HeaderKind::ContentLength, len.as_bytes())
    }

    /// Append `Connection: close`.
    #[inline]
    pub fn append_connection_close(&mut self) -> Result<(), BuildError> {
        self.append_header(HeaderKind::Connection, CLOSE)
    }

    /// Append `Connection: keep-alive`.
    #[inline]
    pub fn append_connection_keep_alive(&mut self) -> Result<(), BuildError> {
        self.append_header(HeaderKind::Connection, KEEP_ALIVE)
    }

    /// Append `Date` and an `Expires` with the same value, expiring the response immediately.
    ///
    /// The date comes from the per thread cache, see [`date::with_date`].
    pub fn append_date_and_expires(&mut self) -> Result<(), BuildError> {
        date::with_date(|now| {
            self.append_header(HeaderKind::Date, now)?;
            self.append_header(HeaderKind::Expires, now)
        })
    }

    /// Append `Date` from the per thread cache.
    pub fn append_date(&mut self) -> Result<(), BuildError> {
        date::with_date(|now| self.append_header(HeaderKind::Date, now))
    }

    // ===== Complete =====

    /// Terminate the header block and return it.
    ///
    /// This must be called exactly once per built header, every call appends another empty line.
    pub fn finalize(&mut self) -> Result<&[u8], BuildError> {
        let buf = self.output_mut()?;
        buf.extend_from_slice(CRLF);
        Ok(&buf[..])
    }

    /// Returns the header block written so far, `None` before a `begin_*` call.
    #[inline]
    pub fn complete_header(&self) -> Option<&[u8]> {
        self.output.as_deref()
    }
}
