use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_codes {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*

            /// Lookup a known [`StatusCode`] from its numeric value.
            #[inline]
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $(
                        $int => Some(Self::$id),
                    )*
                    _ => None,
                }
            }

            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn status(&self) -> u16 {
                self.0.get()
            }

            /// Returns status code as str, e.g: `"200"`.
            pub const fn status_str(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => stringify!($int),
                    )*
                    _ => "500",
                }
            }

            /// Returns reason phrase, e.g: `"OK"`.
            pub const fn message(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => $msg,
                    )*
                    _ => "Internal Server Error",
                }
            }
        }
    };
}

// values are only constructed from the table below
status_codes! {
    /// `100 Continue`
    100 CONTINUE "Continue";
    /// `101 Switching Protocols`
    101 SWITCHING_PROTOCOL "Switching Protocols";
    /// `200 OK`
    200 OK "OK";
    /// `201 Created`
    201 CREATED "Created";
    /// `202 Accepted`
    202 ACCEPTED "Accepted";
    /// `204 No Content`
    204 NO_CONTENT "No Content";
    /// `206 Partial Content`
    206 PARTIAL_CONTENT "Partial Content";
    /// `301 Moved Permanently`
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302 Found`
    302 FOUND "Found";
    /// `303 See Other`
    303 SEE_OTHER "See Other";
    /// `304 Not Modified`, the cached representation is still valid.
    304 NOT_MODIFIED "Not Modified";
    /// `307 Temporary Redirect`
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `400 Bad Request`, reported for every failed parse.
    400 BAD_REQUEST "Bad Request";
    /// `401 Unauthorized`
    401 UNAUTHORIZED "Unauthorized";
    /// `403 Forbidden`
    403 FORBIDDEN "Forbidden";
    /// `404 Not Found`
    404 NOT_FOUND "Not Found";
    /// `405 Method Not Allowed`
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `408 Request Timeout`
    408 REQUEST_TIMEOUT "Request Timeout";
    /// `411 Length Required`
    411 LENGTH_REQUIRED "Length Required";
    /// `412 Precondition Failed`
    412 PRECONDITION_FAILED "Precondition Failed";
    /// `413 Content Too Large`
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `414 URI Too Long`
    414 URI_TOO_LONG "URI Too Long";
    /// `415 Unsupported Media Type`
    415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type";
    /// `416 Range Not Satisfiable`
    416 RANGE_NOT_SATISFIABLE "Range Not Satisfiable";
    /// `431 Request Header Fields Too Large`
    431 REQUEST_HEADER_FIELDS_TOO_LARGE "Request Header Fields Too Large";
    /// `500 Internal Server Error`
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501 Not Implemented`
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502 Bad Gateway`
    502 BAD_GATEWAY "Bad Gateway";
    /// `503 Service Unavailable`
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504 Gateway Timeout`
    504 GATEWAY_TIMEOUT "Gateway Timeout";
    /// `505 HTTP Version Not Supported`
    505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.status_str(), self.message())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.status()).finish()
    }
}
