// ABOUTME: Error types for RSS document construction and the XML codec.
// ABOUTME: Provides RssError with Validation, MalformedMarkup, and Codec variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while building or transcoding an RSS document.
#[derive(Debug, Error)]
pub enum RssError {
    /// A builder rejected its input: a required child or attribute is
    /// missing, or a value fails a content rule.
    #[error("{0}")]
    Validation(String),

    /// Text content was expected to hold literal markup but the markup
    /// is not well-formed (missing `>` or closing tag).
    #[error("content is not well-formed embedded markup: {0}")]
    MalformedMarkup(String),

    /// The underlying event source or sink failed (I/O, transport,
    /// malformed XML, resource not found).
    #[error("rss codec error: {0}")]
    Codec(String),
}

impl RssError {
    /// Creates a Validation error with the violated rule.
    pub fn validation(msg: impl Into<String>) -> Self {
        RssError::Validation(msg.into())
    }

    /// Creates a MalformedMarkup error with a scan diagnostic.
    pub fn malformed(msg: impl Into<String>) -> Self {
        RssError::MalformedMarkup(msg.into())
    }

    /// Creates a Codec error from an underlying failure.
    pub fn codec(err: impl fmt::Display) -> Self {
        RssError::Codec(err.to_string())
    }
}
