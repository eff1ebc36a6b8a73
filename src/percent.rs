//! Percent decoding.

/// An error that can occur when percent decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// `%` is not followed by two hex digits.
    Malformed,
    /// Decoded bytes does not fit in the output buffer.
    Overflow,
}

impl DecodeError {
    const fn message(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed percent escape",
            Self::Overflow => "decoded bytes exceed output buffer",
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Decode `%XX` escapes of `input` into `output`, returning the number of bytes written.
///
/// Bytes other than `%` are copied as is, `+` is not treated as space.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if `%` is not followed by two hex digits, and
/// [`DecodeError::Overflow`] if `output` is too small.
pub fn decode(mut input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
    let mut written = 0;

    while let [byte, rest @ ..] = input {
        let (decoded, rest) = match (byte, rest) {
            (b'%', [hi, lo, rest @ ..]) => match (hex_digit(*hi), hex_digit(*lo)) {
                (Some(hi), Some(lo)) => (hi << 4 | lo, rest),
                _ => return Err(DecodeError::Malformed),
            },
            (b'%', _) => return Err(DecodeError::Malformed),
            (byte, rest) => (*byte, rest),
        };

        let Some(slot) = output.get_mut(written) else {
            return Err(DecodeError::Overflow);
        };
        *slot = decoded;
        written += 1;
        input = rest;
    }

    Ok(written)
}

const fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
