//! HTTP responses for the HTTP tracker.
//!
//! Every response, failures included, is a bencoded dictionary sent with
//! `200 OK` and a `text/plain` content type.
//!
//! Refer to the generic [HTTP server documentation](crate::servers::http) for
//! more information about the HTTP tracker.
pub mod announce;
pub mod error;
pub mod scrape;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;

pub use announce::Announce;
pub use scrape::Scrape;

pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// A tracker response that can be written as a bencoded body.
pub trait Response: axum::response::IntoResponse {
    /// Returns the bencoded body of the response.
    ///
    /// # Errors
    ///
    /// If the response cannot be bencoded it returns the failure to send
    /// instead.
    fn body(self) -> Result<Vec<u8>, error::Error>;
}

/// Builds the HTTP response for a bencoded body.
pub(crate) fn bencoded(body: Vec<u8>) -> axum::response::Response {
    axum::response::IntoResponse::into_response((StatusCode::OK, [(CONTENT_TYPE, CONTENT_TYPE_TEXT_PLAIN)], body))
}
