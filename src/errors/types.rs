//! Error type definitions for the M3U Loader
//!
//! This module defines the error hierarchy used by the parser, the playlist
//! fetcher and the web layer.

use thiserror::Error;

/// Errors produced by the playlist parser
///
/// Only the header check can fail; every other irregularity in a playlist is
/// skipped without an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// The first line does not start with `#EXTM3U`
    #[error("Malformed playlist: missing #EXTM3U header")]
    Malformed,
}

/// Errors raised while fetching a playlist from its host
#[derive(Error, Debug)]
pub enum SourceError {
    /// Non-success HTTP status from the playlist host
    #[error("HTTP error: {status} - URL: {url}")]
    Http { status: u16, url: String },

    /// Network connection or request timeouts
    #[error("Connection timeout: {url}")]
    Timeout { url: String },

    /// The body could not be decoded into playlist text
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Anything else the transport reports, with credentials already obfuscated
    #[error("Request failed: {message}")]
    Request { message: String },
}

/// Top-level application error type
///
/// Handlers return this type; `web::responses` turns it into a JSON body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Playlist parsing errors
    #[error("{0}")]
    Playlist(#[from] PlaylistError),

    /// Playlist fetching errors
    #[error("Failed to fetch M3U playlist: {0}")]
    Source(#[from] SourceError),

    /// The catalog request carried no playlist URL
    #[error("M3U playlist URL not specified")]
    MissingPlaylistUrl,

    /// Catalog id other than the one the manifest advertises
    #[error("Unsupported catalog: {id}")]
    UnsupportedCatalog { id: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

impl SourceError {
    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
