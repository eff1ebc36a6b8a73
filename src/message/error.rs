use crate::http::StatusCode;
use crate::percent::DecodeError;

/// An error that can occur when parsing a [`Message`].
///
/// Every variant is reported to the peer as [`StatusCode::BAD_REQUEST`], except
/// [`ParseError::Internal`].
///
/// [`Message`]: super::Message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// End of line missing where one is required.
    MalformedLine,
    /// Header line without `:`.
    MissingSeparator,
    /// Request target contains a malformed percent escape.
    InvalidUri,
    /// Input exhausted before a request line or status line is found.
    UnterminatedInput,
    /// `Connection` value other than `close` or `keep-alive`.
    InvalidConnection,
    /// The message was created for building.
    InvalidRole,
    /// Parser state inconsistency.
    Internal,
}

impl ParseError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::MalformedLine => "malformed line",
            Self::MissingSeparator => "missing header separator",
            Self::InvalidUri => "invalid request target",
            Self::UnterminatedInput => "unterminated input",
            Self::InvalidConnection => "invalid connection header",
            Self::InvalidRole => "message is not for parsing",
            Self::Internal => "internal parser error",
        }
    }

    /// Returns the status code to report for this error.
    #[inline]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DecodeError> for ParseError {
    #[inline]
    fn from(_: DecodeError) -> Self {
        Self::InvalidUri
    }
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// ===== Build Error =====

/// An error that can occur when building a header block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Operation does not match the role or kind of the message.
    InvalidRole,
    /// No `begin_*` operation has succeeded yet.
    NotStarted,
}

impl BuildError {
    const fn message(&self) -> &'static str {
        match self {
            Self::InvalidRole => "operation does not match message role",
            Self::NotStarted => "header block not started",
        }
    }
}

impl std::error::Error for BuildError {}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
