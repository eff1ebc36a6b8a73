//! Request line, status line and header block parser.
use super::{Message, MessageKind, ParseError, Role};
use crate::headers::{FieldTable, HeaderKind};
use crate::http::{Method, Version};
use crate::log::{debug, warning};
use crate::matches;
use crate::percent;
use crate::scan::Scanner;

/// Length of the scheme prefix of an absolute-form request target, `http://`.
pub const SCHEME_LEN: usize = 7;

const CLOSE: &[u8] = b"close";
const KEEP_ALIVE: &[u8] = b"keep-alive";

impl<'a> Message<'a> {
    /// Parse the input buffer.
    ///
    /// Lines before the request line or status line are skipped as long as each is a single word
    /// followed by an end of line, e.g. empty lines. A status line only classifies the message,
    /// the header block is parsed for requests only.
    ///
    /// Calling `parse` again discards the previous result.
    ///
    /// # Errors
    ///
    /// On error, [`status_code`][Message::status_code] is set to `400`. Header values stored
    /// before the failure remain in the table and must not be trusted.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        if self.role != Role::Parse {
            warning!("parse called on a message created for building");
            return Err(ParseError::InvalidRole);
        }

        self.reset();

        let result = self.parse_message();
        if let Err(err) = result {
            debug!(
                "bad request ({err}): {:?}",
                String::from_utf8_lossy(self.request_line)
            );
            self.status_code = err.status().status();
        }
        result
    }

    fn reset(&mut self) {
        self.kind = MessageKind::Unclassified;
        self.method = None;
        self.version = None;
        self.status_code = 200;
        self.absolute_uri = &[];
        self.relative_uri = &[];
        self.scheme = None;
        self.host = None;
        self.request_path = None;
        self.query_string = None;
        self.keep_alive = false;
        self.fields = FieldTable::new();
        self.request_line = Scanner::new(self.input).consume_until_eol();
    }

    fn parse_message(&mut self) -> Result<(), ParseError> {
        let mut scan = Scanner::new(self.input);

        while self.kind == MessageKind::Unclassified {
            if scan.remaining() == 0 {
                return Err(ParseError::UnterminatedInput);
            }
            self.parse_start_line(&mut scan)?;
        }

        if self.kind == MessageKind::Request {
            self.parse_headers(&mut scan)?;
        }

        Ok(())
    }

    // ===== Start Line =====

    /// Parse one line, classifying the message if it is a request line or a status line.
    fn parse_start_line(&mut self, scan: &mut Scanner<'a>) -> Result<(), ParseError> {
        let start = scan.position();
        let word = scan.consume_word();

        if let Some(method) = Method::from_bytes(word) {
            self.method = Some(method);
            self.kind = MessageKind::Request;
            return self.parse_request_line(scan);
        }

        if word == b"HTTP" {
            let after_word = scan.clone();
            scan.consume_until_whitespace();
            let version = &self.input[start..scan.position()];
            scan.consume_until_digit();

            if let Some(code) = scan.consume_integer().filter(|&c| c != 0) {
                self.status_code = u16::try_from(code).map_err(|_| ParseError::MalformedLine)?;
                self.kind = MessageKind::Response;
                self.version = Version::from_bytes(version);

                // reason phrase
                scan.consume_until_eol();
                if !scan.expect_eol() {
                    return Err(ParseError::MalformedLine);
                }
                return Ok(());
            }

            *scan = after_word;
        }

        // not a start line, it must still end here
        if !scan.expect_eol() {
            return Err(ParseError::MalformedLine);
        }

        Ok(())
    }

    fn parse_request_line(&mut self, scan: &mut Scanner<'a>) -> Result<(), ParseError> {
        scan.consume_whitespace();

        self.parse_uri(scan)?;

        scan.consume_whitespace();

        let version = scan.consume_until_eol();
        if !version.is_empty() {
            self.version = Version::from_bytes(version);
        }

        if !scan.expect_eol() {
            return Err(ParseError::MalformedLine);
        }

        Ok(())
    }

    fn parse_uri(&mut self, scan: &mut Scanner<'a>) -> Result<(), ParseError> {
        let uri = scan.consume_until_mask(matches::is_uri_stop);
        self.absolute_uri = uri;

        let mut url = Scanner::new(uri);

        // absolute-form, e.g: `http://host/path`
        if uri.first().is_some_and(|&b| b != b'/') {
            self.scheme = Some(url.consume_length(SCHEME_LEN));
            self.host = Some(url.consume_until(b'/'));
        }

        if scan.expect(b'?') {
            let query = scan.consume_until_whitespace();
            if !query.is_empty() {
                self.query_string = Some(query.into());
            }
        }

        self.relative_uri = url.rest();

        // one extra byte, filling it means the decoder went past the input length
        let mut decoded = vec![0; self.relative_uri.len() + 1];
        let written = percent::decode(self.relative_uri, &mut decoded)?;
        if written == decoded.len() {
            return Err(ParseError::InvalidUri);
        }

        // drop the leading `/`
        self.request_path = Some(decoded.get(1..written).unwrap_or_default().into());

        Ok(())
    }

    // ===== Header Fields =====

    fn parse_headers(&mut self, scan: &mut Scanner<'a>) -> Result<(), ParseError> {
        loop {
            match scan.peek() {
                Some(b'\r' | b'\n') => break,
                Some(_) => {}
                // no empty line terminating the header block
                None => return Err(ParseError::MalformedLine),
            }

            let name = scan.get_thru(b':').ok_or(ParseError::MissingSeparator)?;
            scan.expect(b' ');
            let value = scan.get_thru_eol().ok_or(ParseError::MalformedLine)?;

            let Some(kind) = HeaderKind::from_bytes(name) else {
                continue;
            };

            if kind == HeaderKind::Connection {
                self.keep_alive = parse_connection(value)?;
            }

            self.fields.insert(kind, value);
        }

        // the loop only exits at an end of line
        if !scan.expect_eol() {
            return Err(ParseError::Internal);
        }

        Ok(())
    }
}

fn parse_connection(value: &[u8]) -> Result<bool, ParseError> {
    if value.eq_ignore_ascii_case(CLOSE) {
        Ok(false)
    } else if value.eq_ignore_ascii_case(KEEP_ALIVE) {
        Ok(true)
    } else {
        Err(ParseError::InvalidConnection)
    }
}
