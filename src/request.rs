//! Incoming HTTP request type.
//!
//! The server buffers the whole body before a handler runs, so `Request` is
//! plain data: method, path, parsed query string, body bytes. Handlers never
//! await on the request itself.

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;

/// A fully buffered incoming request.
pub struct Request {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    body: Bytes,
}

impl Request {
    /// Builds a request from a method, a request target (`/path?query`),
    /// and a buffered body.
    ///
    /// The query string is split off the target and percent-decoded here,
    /// once, so handlers only ever see decoded values.
    pub fn new(method: Method, target: &str, body: impl Into<Bytes>) -> Self {
        let (path, raw_query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        Self {
            method,
            path: path.to_owned(),
            query: parse_query(raw_query),
            body: body.into(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns a query parameter by name.
    ///
    /// For `/todo?id=42`, `req.query("id")` returns `Some("42")`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (percent_decode(key), percent_decode(value)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

/// Decodes `%XX` escapes and `+` as space. A `%` not followed by two hex
/// digits passes through literally.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
