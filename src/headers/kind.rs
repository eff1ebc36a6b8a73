header_kinds! {
    /// Closed enumeration of the header fields this crate recognizes.
    ///
    /// Lookup by name is ASCII case-insensitive, [`HeaderKind::as_str`] returns the canonical wire
    /// spelling.
    pub enum HeaderKind;

    // ===== Request context =====
    Accept => "Accept",
    AcceptEncoding => "Accept-Encoding",
    AcceptLanguage => "Accept-Language",
    Authorization => "Authorization",
    Cookie => "Cookie",
    From => "From",
    Host => "Host",
    Referer => "Referer",
    UserAgent => "User-Agent",
    XForwardedFor => "X-Forwarded-For",

    // ===== Connection management =====
    Connection => "Connection",
    KeepAlive => "Keep-Alive",
    Upgrade => "Upgrade",

    // ===== Caching and conditionals =====
    CacheControl => "Cache-Control",
    Date => "Date",
    Expires => "Expires",
    IfModifiedSince => "If-Modified-Since",
    IfNoneMatch => "If-None-Match",
    LastModified => "Last-Modified",
    ETag => "ETag",

    // ===== Message body information =====
    ContentEncoding => "Content-Encoding",
    ContentLength => "Content-Length",
    ContentType => "Content-Type",
    TransferEncoding => "Transfer-Encoding",
    Range => "Range",
    ContentRange => "Content-Range",

    // ===== Response context =====
    Allow => "Allow",
    Location => "Location",
    Server => "Server",
    SetCookie => "Set-Cookie",
    WwwAuthenticate => "WWW-Authenticate",

    // ===== CORS =====
    AccessControlAllowOrigin => "Access-Control-Allow-Origin",
}

impl HeaderKind {
    /// Lookup a [`HeaderKind`] by name, ignoring ASCII case.
    ///
    /// Returns `None` for unrecognized names.
    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str().as_bytes().eq_ignore_ascii_case(name))
            .copied()
    }

    /// Position of this kind in [`HeaderKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for HeaderKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! header_kinds {
    (
        $(#[$doc:meta])*
        pub enum $ty:ident;
        $($kind:ident => $name:literal,)*
    ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $ty {
            $(
                #[doc = concat!("`", $name, "`")]
                $kind,
            )*
        }

        impl HeaderKind {
            /// Every recognized kind, in declaration order.
            pub const ALL: &[HeaderKind] = &[$(HeaderKind::$kind),*];

            /// Number of recognized kinds.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the canonical wire name, e.g: `"Content-Length"`.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(HeaderKind::$kind => $name,)*
                }
            }
        }
    };
}

use header_kinds;
