//! Centralized error handling for the M3U Loader
//!
//! Every layer reports failures through the types in [`types`]. The playlist
//! parser has its own narrow [`PlaylistError`]; fetch failures surface as
//! [`SourceError`]; everything a handler can return is an [`AppError`].
//!
//! # Usage
//!
//! ```rust
//! use m3u_loader::errors::{AppError, AppResult};
//!
//! fn example_function(url: Option<&str>) -> AppResult<String> {
//!     url.map(str::to_string).ok_or(AppError::MissingPlaylistUrl)
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
