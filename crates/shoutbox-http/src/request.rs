//! Request-line parsing for the HTTP/1.0-style subset the bulletin speaks.
//!
//! Only the first line of the buffer is meaningful; headers and any body
//! after it are ignored.

/// A parsed request line: `<method> <path>[?<query>] <version>\r\n`.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub version: &'a str,
}

impl<'a> RequestLine<'a> {
    /// Parse the first line of a raw request buffer.
    ///
    /// The line must end in `\r\n` and carry exactly three
    /// whitespace-separated tokens. The target is split at the first `?`
    /// into path and raw (still-encoded) query.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (line, _rest) = raw.split_once("\r\n")?;

        let mut tokens = line.split_whitespace();
        let method = tokens.next()?;
        let target = tokens.next()?;
        let version = tokens.next()?;
        if tokens.next().is_some() {
            return None;
        }

        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        Some(Self {
            method,
            path,
            query,
            version,
        })
    }
}
