use thiserror::Error;

use shoutbox_store::StoreError;

use crate::response::{Response, Status};

/// Terminal request failures.
///
/// Every variant maps to exactly one HTTP status and a short plain-text
/// body line; nothing is retried and no store state is touched after a
/// failure surfaces.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request")]
    Malformed,
    #[error("only GET is supported")]
    UnsupportedMethod,
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("unknown path")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("store unavailable")]
    Unavailable,
}

impl RequestError {
    pub fn status(&self) -> Status {
        match self {
            Self::Malformed | Self::MissingParameter(_) | Self::InvalidParameter(_) => {
                Status::BadRequest
            }
            Self::UnsupportedMethod => Status::MethodNotAllowed,
            Self::NotFound => Status::NotFound,
            Self::Store(_) | Self::Unavailable => Status::ServerError,
        }
    }

    pub fn into_response(self) -> Response {
        Response::error(self.status(), &self.to_string())
    }
}
