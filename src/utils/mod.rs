//! Utility modules for the m3u-loader application
//!
//! Playlist download, body decompression and URL helpers.

pub mod decompression;
pub mod http_client;
pub mod url;

pub use decompression::{CompressionFormat, DecompressionService};
pub use http_client::{PlaylistFetcher, StandardHttpClient};
pub use url::UrlUtils;
