/// HTTP Method.
///
/// Methods from [RFC9110] and PATCH from [RFC5789]. Arbitrary method is not supported, an
/// unrecognized token is represented as `None` by [`Method::from_bytes`].
///
/// [RFC5789]: https://www.rfc-editor.org/rfc/rfc5789
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method(u8);

methods! {
    static NAMES: [9];

    /// `GET`
    pub const GET = (0, b"GET");
    /// `HEAD`
    pub const HEAD = (1, b"HEAD");
    /// `POST`
    pub const POST = (2, b"POST");
    /// `PUT`
    pub const PUT = (3, b"PUT");
    /// `DELETE`
    pub const DELETE = (4, b"DELETE");
    /// `CONNECT`
    pub const CONNECT = (5, b"CONNECT");
    /// `OPTIONS`
    pub const OPTIONS = (6, b"OPTIONS");
    /// `TRACE`
    pub const TRACE = (7, b"TRACE");
    /// `PATCH`
    pub const PATCH = (8, b"PATCH");
}

impl Method {
    /// Returns the wire string of the method, e.g: `"GET"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        NAMES[self.0 as usize]
    }
}

impl std::str::FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(UnknownMethod)
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

/// Method token is not one of the known methods.
#[derive(Debug)]
pub struct UnknownMethod;

impl std::error::Error for UnknownMethod { }

impl std::fmt::Display for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

// ===== Macros =====

macro_rules! methods {
    (
        static $names:ident: [$len:literal];
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self($idx);
            )*

            /// Lookup [`Method`] from its token, matching is case-sensitive.
            #[inline]
            pub const fn from_bytes(src: &[u8]) -> Option<Method> {
                match src {
                    $(
                        $val => Some(Self::$name),
                    )*
                    _ => None,
                }
            }
        }

        static $names: [&str; $len] = [
            $(
                // SAFETY: method literals are ASCII
                unsafe { std::str::from_utf8_unchecked($val) },
            )*
        ];
    };
}

use methods;
