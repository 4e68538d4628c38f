//! Playlist sources
//!
//! Parsers that turn fetched playlist text into stream records.

pub mod m3u;

pub use m3u::{extract_attribute, parse_playlist, parse_playlist_with_prefix};
