//! Byte classification tables.
//!
//! Every table is a 256 entry `static`, computed at compile time.

macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident: $u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

byte_map! {
    /// Bytes that terminate a request target: `\t`, `\r`, `\n`, `' '` and `?`.
    #[inline(always)]
    pub const fn is_uri_stop(byte: u8) {
        matches!(byte, b'\t' | b'\r' | b'\n' | b' ' | b'?')
    }
}

byte_map! {
    /// `' '` and `\t`.
    #[inline(always)]
    pub const fn is_whitespace(byte: u8) {
        matches!(byte, b' ' | b'\t')
    }
}

byte_map! {
    #[inline(always)]
    pub const fn is_eol(byte: u8) {
        matches!(byte, b'\r' | b'\n')
    }
}

byte_map! {
    #[inline(always)]
    pub const fn is_eol_or_whitespace(byte: u8) {
        matches!(byte, b'\r' | b'\n' | b' ' | b'\t')
    }
}

byte_map! {
    /// A word is made of ASCII letters only, `HTTP/1.1` yields the word `HTTP`.
    #[inline(always)]
    pub const fn is_word(byte: u8) {
        byte.is_ascii_alphabetic()
    }
}
