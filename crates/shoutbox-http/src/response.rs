//! Plain-text HTTP/1.0 response rendering.

/// Status subset used by the bulletin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    ServerError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::ServerError => 500,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::ServerError => "Server Error",
        }
    }
}

/// A complete response: status line, minimal headers, plain-text body.
#[derive(Debug, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub body: String,
}

impl Response {
    pub fn ok(body: String) -> Self {
        Self {
            status: Status::Ok,
            body,
        }
    }

    /// An error response whose body is one short line.
    pub fn error(status: Status, message: &str) -> Self {
        Self {
            status,
            body: format!("{message}\n"),
        }
    }

    /// Serialize into one complete response buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        format!(
            "HTTP/1.0 {} {}\r\nContent-Type: text/plain; charset=utf-8\r\n\r\n{}",
            self.status.code(),
            self.status.reason(),
            self.body,
        )
        .into_bytes()
    }
}
