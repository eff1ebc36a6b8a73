use crate::headers::HeaderKind;
use crate::http::{Method, StatusCode, Version};
use crate::message::{BuildError, Message, MessageKind, ParseError};

use std::time::{Duration, UNIX_EPOCH};

const IDENTITY: &[u8] = b"httpmsg/0.1";

macro_rules! parse {
    (#[error($err:ident)] $input:expr) => {{
        let mut msg = Message::for_parsing(IDENTITY, &$input[..]);
        assert_eq!(msg.parse(), Err(ParseError::$err));
        assert_eq!(msg.status_code(), 400);
        msg
    }};
    ($input:expr) => {{
        let mut msg = Message::for_parsing(IDENTITY, &$input[..]);
        match msg.parse() {
            Ok(()) => msg,
            Err(err) => panic!("unexpected parse error: {err:?}"),
        }
    }};
}

// ===== Request Line =====

#[test]
fn test_parse_request() {
    let msg = parse!(b"GET /a/b?x=1 HTTP/1.1\r\nHost: h\r\n\r\n");

    assert_eq!(msg.kind(), MessageKind::Request);
    assert_eq!(msg.method(), Some(Method::GET));
    assert_eq!(msg.version(), Some(Version::HTTP_11));
    assert_eq!(msg.request_line(), b"GET /a/b?x=1 HTTP/1.1");
    assert_eq!(msg.absolute_uri(), b"/a/b");
    assert_eq!(msg.relative_uri(), b"/a/b");
    assert_eq!(msg.request_path(), Some(&b"a/b"[..]));
    assert_eq!(msg.query_string(), Some(&b"x=1"[..]));
    assert_eq!(msg.header(HeaderKind::Host), Some(&b"h"[..]));
    assert_eq!(msg.scheme(), None);
    assert_eq!(msg.host(), None);
    assert_eq!(msg.status_code(), 200);
    assert!(!msg.keep_alive());
}

#[test]
fn test_request_line_variants() {
    macro_rules! test {
        ($input:literal; $m:ident, $path:literal, $query:expr, $v:expr) => {
            let msg = parse!($input);
            assert_eq!(msg.kind(), MessageKind::Request);
            assert_eq!(msg.method(), Some(Method::$m));
            assert_eq!(msg.request_path(), Some(&$path[..]));
            assert_eq!(msg.query_string(), $query.map(|q: &[u8]| q));
            assert_eq!(msg.version(), $v);
        };
    }

    test!(b"GET / HTTP/1.1\r\n\r\n"; GET, b"", None, Some(Version::HTTP_11));
    test!(b"GET / HTTP/1.1\n\n"; GET, b"", None, Some(Version::HTTP_11));
    test!(b"POST /index.html HTTP/1.0\r\n\r\n"; POST, b"index.html", None, Some(Version::HTTP_10));
    test!(b"GET /search?q=a%20b&f=1 HTTP/1.1\r\n\r\n"; GET, b"search", Some(&b"q=a%20b&f=1"[..]), Some(Version::HTTP_11));
    test!(b"GET /path%20with%20spaces HTTP/1.1\r\n\r\n"; GET, b"path with spaces", None, Some(Version::HTTP_11));
    test!(b"GET /static/%2E%2E HTTP/1.1\r\n\r\n"; GET, b"static/..", None, Some(Version::HTTP_11));
    test!(b"GET /x? HTTP/1.1\r\n\r\n"; GET, b"x", None, Some(Version::HTTP_11));
    test!(b"GET\t/tab\tHTTP/1.1\r\n\r\n"; GET, b"tab", None, Some(Version::HTTP_11));
    test!(b"GET /old HTTP/9.9\r\n\r\n"; GET, b"old", None, None);
    test!(b"GET /no-version\r\n\r\n"; GET, b"no-version", None, None);
}

#[test]
fn test_absolute_form() {
    let msg = parse!(b"GET http://example.com/a%2Fb?k=v HTTP/1.1\r\n\r\n");
    assert_eq!(msg.absolute_uri(), b"http://example.com/a%2Fb");
    assert_eq!(msg.scheme(), Some(&b"http://"[..]));
    assert_eq!(msg.host(), Some(&b"example.com"[..]));
    assert_eq!(msg.relative_uri(), b"/a%2Fb");
    assert_eq!(msg.request_path(), Some(&b"a/b"[..]));
    assert_eq!(msg.query_string(), Some(&b"k=v"[..]));

    let msg = parse!(b"OPTIONS http://example.com HTTP/1.1\r\n\r\n");
    assert_eq!(msg.host(), Some(&b"example.com"[..]));
    assert_eq!(msg.relative_uri(), b"");
    assert_eq!(msg.request_path(), Some(&b""[..]));
}

#[test]
fn test_leading_lines_skipped() {
    let direct = parse!(b"GET / HTTP/1.0\r\n\r\n");
    let skipped = parse!(b"\r\nGET / HTTP/1.0\r\n\r\n");

    assert_eq!(skipped.kind(), direct.kind());
    assert_eq!(skipped.method(), direct.method());
    assert_eq!(skipped.version(), direct.version());
    assert_eq!(skipped.request_path(), direct.request_path());
    assert_eq!(skipped.fields(), direct.fields());

    let msg = parse!(b"\n\r\nnoise\r\nHEAD /x HTTP/1.1\r\n\r\n");
    assert_eq!(msg.method(), Some(Method::HEAD));
    assert_eq!(msg.request_path(), Some(&b"x"[..]));
}

#[test]
fn test_status_line() {
    let msg = parse!(b"HTTP/1.1 404 Not Found\r\n");
    assert_eq!(msg.kind(), MessageKind::Response);
    assert_eq!(msg.status_code(), 404);
    assert_eq!(msg.version(), Some(Version::HTTP_11));
    assert_eq!(msg.method(), None);

    // header block is not parsed for a status line
    let msg = parse!(b"HTTP/1.0 200 OK\r\nServer: x\r\n\r\n");
    assert_eq!(msg.kind(), MessageKind::Response);
    assert_eq!(msg.status_code(), 200);
    assert!(msg.fields().is_empty());
}

#[test]
fn test_parse_errors() {
    parse!(#[error(MalformedLine)] b"GET / HTTP/1.1");
    parse!(#[error(MalformedLine)] b"HTTP/1.1 200 OK");
    parse!(#[error(MalformedLine)] b"garbage line here\r\nGET / HTTP/1.1\r\n\r\n");
    parse!(#[error(MalformedLine)] b"HTTP/1.1 abc\r\n");
    parse!(#[error(MalformedLine)] b"HTTP/1.1 000 Zero\r\n");
    parse!(#[error(UnterminatedInput)] b"");
    parse!(#[error(UnterminatedInput)] b"\r\n\r\n");
    parse!(#[error(InvalidUri)] b"GET /%zz HTTP/1.1\r\n\r\n");
    parse!(#[error(InvalidUri)] b"GET /a% HTTP/1.1\r\n\r\n");

    let msg = parse!(#[error(MalformedLine)] b"GET / HTTP/1.1\r\n");
    assert_eq!(msg.kind(), MessageKind::Request);
}

#[test]
fn test_error_status() {
    assert_eq!(ParseError::MalformedLine.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ParseError::UnterminatedInput.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ParseError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ===== Header Fields =====

#[test]
fn test_header_fields() {
    let msg = parse!(b"GET / HTTP/1.1\r\nhost: a\r\nContent-Type:text/html\r\nX-Custom: skip\r\nContent-Length:  12\r\n\r\nbody");

    assert_eq!(msg.header(HeaderKind::Host), Some(&b"a"[..]));
    assert_eq!(msg.header(HeaderKind::ContentType), Some(&b"text/html"[..]));
    // only one leading space is skipped
    assert_eq!(msg.header(HeaderKind::ContentLength), Some(&b" 12"[..]));
    assert_eq!(msg.header(HeaderKind::Date), None);
    assert_eq!(msg.fields().len(), 3);
}

#[test]
fn test_duplicate_header_last_wins() {
    let msg = parse!(b"GET / HTTP/1.1\r\nHost: first\r\nHost: second\r\n\r\n");
    assert_eq!(msg.header(HeaderKind::Host), Some(&b"second"[..]));
}

#[test]
fn test_header_errors() {
    let msg = parse!(#[error(MissingSeparator)] b"GET / HTTP/1.1\r\nHost: a\r\nNoColon\r\n\r\n");
    // partial table is kept
    assert_eq!(msg.header(HeaderKind::Host), Some(&b"a"[..]));

    parse!(#[error(MalformedLine)] b"GET / HTTP/1.1\r\nHost: a");
    parse!(#[error(MalformedLine)] b"GET / HTTP/1.1\r\nHost: a\r\n");
    parse!(#[error(InvalidConnection)] b"GET / HTTP/1.1\r\nConnection: upgrade\r\n\r\n");
}

#[test]
fn test_keep_alive() {
    macro_rules! test {
        ($input:literal, $expect:literal) => {
            let msg = parse!($input);
            assert_eq!(msg.keep_alive(), $expect);
        };
    }

    test!(b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n", false);
    test!(b"GET / HTTP/1.1\r\nConnection: keep-alive\r\n\r\n", true);
    test!(b"GET / HTTP/1.0\r\nConnection: Keep-Alive\r\n\r\n", true);
    test!(b"GET / HTTP/1.1\r\nConnection: CLOSE\r\n\r\n", false);
    // not derived from version
    test!(b"GET / HTTP/1.1\r\n\r\n", false);
    test!(b"GET / HTTP/1.0\r\n\r\n", false);
}

#[test]
fn test_if_modified_since() {
    let msg = parse!(b"GET / HTTP/1.1\r\nIf-Modified-Since: Sun, 06 Nov 1994 08:49:37 GMT\r\n\r\n");
    assert_eq!(msg.if_modified_since(), Some(UNIX_EPOCH + Duration::from_secs(784111777)));

    let msg = parse!(b"GET / HTTP/1.1\r\nIf-Modified-Since: yesterday\r\n\r\n");
    assert_eq!(msg.if_modified_since(), None);
}

#[test]
fn test_reparse_discards_previous() {
    let mut msg = Message::for_parsing(IDENTITY, b"GET /a?q HTTP/1.1\r\nHost: h\r\n\r\n");
    assert_eq!(msg.parse(), Ok(()));
    assert_eq!(msg.parse(), Ok(()));
    assert_eq!(msg.request_path(), Some(&b"a"[..]));
    assert_eq!(msg.query_string(), Some(&b"q"[..]));
    assert_eq!(msg.fields().len(), 1);
}

#[test]
fn test_parse_on_building_message() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Request);
    assert_eq!(msg.parse(), Err(ParseError::InvalidRole));
    assert_eq!(msg.kind(), MessageKind::Request);
    assert_eq!(msg.status_code(), 0);
}

// ===== Builder =====

#[test]
fn test_build_response() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Response);
    msg.begin_response(StatusCode::NOT_FOUND, Version::HTTP_11).unwrap();
    msg.append_header(HeaderKind::ContentType, b"text/plain").unwrap();
    msg.append_content_length(0u32).unwrap();
    msg.append_connection_close().unwrap();

    assert_eq!(
        msg.finalize().unwrap(),
        b"HTTP/1.1 404 Not Found\r\n\
        Server: httpmsg/0.1\r\n\
        Access-Control-Allow-Origin: *\r\n\
        Content-Type: text/plain\r\n\
        Content-Length: 0\r\n\
        Connection: close\r\n\
        \r\n"
    );
}

#[test]
fn test_build_request() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Request);
    msg.begin_request(Method::POST, Version::HTTP_10).unwrap();
    msg.append_connection_keep_alive().unwrap();

    assert_eq!(
        msg.finalize().unwrap(),
        b"POST / HTTP/1.0\r\nUser-Agent: httpmsg/0.1\r\nConnection: keep-alive\r\n\r\n"
    );
}

#[test]
fn test_rebuild_discards_previous() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Response);
    msg.begin_response(StatusCode::OK, Version::HTTP_11).unwrap();
    msg.append_header(HeaderKind::Location, b"/first").unwrap();
    msg.finalize().unwrap();

    msg.begin_response(StatusCode::NO_CONTENT, Version::HTTP_10).unwrap();
    assert_eq!(
        msg.finalize().unwrap(),
        b"HTTP/1.0 204 No Content\r\nServer: httpmsg/0.1\r\nAccess-Control-Allow-Origin: *\r\n\r\n"
    );
}

#[test]
fn test_content_length_bounds() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Request);
    msg.begin_request(Method::PUT, Version::HTTP_11).unwrap();
    msg.append_content_length(u64::MAX).unwrap();
    msg.append_content_length(u32::MAX).unwrap();

    let header = msg.complete_header().unwrap();
    let header = std::str::from_utf8(header).unwrap();
    assert!(header.contains("Content-Length: 18446744073709551615\r\n"));
    assert!(header.contains("Content-Length: 4294967295\r\n"));
}

#[test]
fn test_date_headers() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Response);
    msg.begin_response(StatusCode::OK, Version::HTTP_11).unwrap();
    msg.append_date_and_expires().unwrap();

    let header = std::str::from_utf8(msg.finalize().unwrap()).unwrap().to_owned();
    let date = header
        .lines()
        .find_map(|line| line.strip_prefix("Date: "))
        .unwrap();
    let expires = header
        .lines()
        .find_map(|line| line.strip_prefix("Expires: "))
        .unwrap();
    assert_eq!(date, expires);
    assert_eq!(date.len(), 29);
    assert!(date.ends_with(" GMT"));

    let mut msg = Message::for_building(IDENTITY, MessageKind::Request);
    msg.begin_request(Method::GET, Version::HTTP_11).unwrap();
    msg.append_date().unwrap();
    let header = std::str::from_utf8(msg.finalize().unwrap()).unwrap();
    assert!(header.contains("\r\nDate: "));
    assert!(!header.contains("Expires"));
}

#[test]
fn test_build_role_errors() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Request);
    assert_eq!(msg.begin_response(StatusCode::OK, Version::HTTP_11), Err(BuildError::InvalidRole));
    assert_eq!(msg.append_date(), Err(BuildError::NotStarted));
    assert_eq!(msg.finalize(), Err(BuildError::NotStarted));
    assert_eq!(msg.complete_header(), None);

    let mut msg = Message::for_parsing(IDENTITY, b"GET / HTTP/1.1\r\n\r\n");
    msg.parse().unwrap();
    assert_eq!(msg.begin_request(Method::GET, Version::HTTP_11), Err(BuildError::InvalidRole));

    let mut msg = Message::for_building(IDENTITY, MessageKind::Unclassified);
    assert_eq!(msg.begin_request(Method::GET, Version::HTTP_11), Err(BuildError::InvalidRole));
}

#[test]
fn test_finalize_twice_appends_twice() {
    let mut msg = Message::for_building(IDENTITY, MessageKind::Request);
    msg.begin_request(Method::GET, Version::HTTP_11).unwrap();
    let first_len = msg.finalize().unwrap().len();
    let second = msg.finalize().unwrap();
    assert_eq!(second.len(), first_len + 2);
    assert!(second.ends_with(b"\r\n\r\n\r\n"));
}
