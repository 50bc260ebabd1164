//! Unified error type.
//!
//! Every variant a handler can produce converts into a complete HTTP
//! response via [`IntoResponse`], so a bad request or a broken store file
//! never takes the process down and never leaks internals to the client.
//! `Io` is the exception: it surfaces infrastructure failures (binding the
//! listener) out of [`Server::serve`](crate::Server::serve) instead.

use std::fmt;

use http::StatusCode;

use crate::response::{IntoResponse, Response};

/// The error type for todofile's fallible operations.
#[derive(Debug)]
pub enum Error {
    /// The required `id` query parameter was not supplied.
    MissingId,
    /// No stored record matches the requested `id`.
    NotFound,
    /// The request body is valid JSON but lacks a string `title`.
    InvalidTitle,
    /// The request body could not be parsed as JSON at all, or a record
    /// could not be serialized.
    Json(serde_json::Error),
    /// The store file could not be read or written.
    Storage(std::io::Error),
    /// Listener-level I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "missing id parameter"),
            Self::NotFound => write!(f, "todo not found"),
            Self::InvalidTitle => write!(f, "missing or invalid title"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Storage(e) | Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Maps each error to its wire representation. Client mistakes get a 4xx
/// with the exact message the route contract promises; everything server-side
/// collapses to an opaque 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MissingId => Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .text("Bad Request: Missing id parameter"),
            Self::NotFound => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .text("Todo not found"),
            Self::InvalidTitle => Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .text("Bad Request: Missing or invalid title"),
            Self::Json(_) | Self::Storage(_) | Self::Io(_) => Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .text("Internal Server Error"),
        }
    }
}

/// Lets handlers return `Result<Response, Error>` and use `?` throughout.
impl<T: IntoResponse> IntoResponse for Result<T, Error> {
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_is_400_with_contract_body() {
        let resp = Error::MissingId.into_response();
        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.body(), b"Bad Request: Missing id parameter");
    }

    #[test]
    fn not_found_is_404() {
        let resp = Error::NotFound.into_response();
        assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(resp.body(), b"Todo not found");
    }

    #[test]
    fn storage_failure_is_opaque_500() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "/secret/path");
        let resp = Error::Storage(io).into_response();
        assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.body(), b"Internal Server Error");
    }

    #[test]
    fn result_err_converts_through() {
        let result: Result<Response, Error> = Err(Error::InvalidTitle);
        let resp = result.into_response();
        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    }
}
