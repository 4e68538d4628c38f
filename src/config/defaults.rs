/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7000;

// Add-on manifest defaults
pub const DEFAULT_ADDON_ID: &str = "pt.rodrigomataslopes.m3u-loader";
pub const DEFAULT_ADDON_VERSION: &str = "0.1.0";
pub const DEFAULT_ADDON_NAME: &str = "M3U Loader";
pub const DEFAULT_ADDON_DESCRIPTION: &str = "Loads streams from external M3U playlists with metadata";
pub const DEFAULT_ID_PREFIX: &str = "m3uloader-";
pub const DEFAULT_CATALOG_ID: &str = "m3u-catalog";
pub const DEFAULT_CATALOG_NAME: &str = "M3U Streams";
pub const DEFAULT_CONTENT_TYPE: &str = "channel";

// Playlist fetch defaults
pub const DEFAULT_CONNECT_TIMEOUT: &str = "10s";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";

// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "M3U_LOADER_";
