use anyhow::Result;
use bytes::Bytes;
use tracing::debug;

/// Supported compression formats detected by magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    Gzip,
    Uncompressed,
}

/// Magic byte detection and decompression for downloaded playlists
///
/// Some panels serve `.m3u.gz` files without a `Content-Encoding` header, so
/// the body is sniffed instead of trusting the response headers.
pub struct DecompressionService;

impl DecompressionService {
    /// Detect compression format using magic bytes
    pub fn detect_compression_format(data: &[u8]) -> CompressionFormat {
        match infer::get(data) {
            Some(kind) if kind.mime_type() == "application/gzip" => CompressionFormat::Gzip,
            _ => CompressionFormat::Uncompressed,
        }
    }

    /// Decompress data based on detected format
    pub fn decompress(data: Bytes) -> Result<Vec<u8>> {
        let format = Self::detect_compression_format(&data);
        debug!("Detected compression format: {:?}", format);

        match format {
            CompressionFormat::Gzip => Self::decompress_gzip(data),
            CompressionFormat::Uncompressed => Ok(data.to_vec()),
        }
    }

    #[cfg(feature = "compression-gzip")]
    fn decompress_gzip(data: Bytes) -> Result<Vec<u8>> {
        use anyhow::Context;
        use flate2::read::GzDecoder;
        use std::io::Read;

        let mut decoder = GzDecoder::new(data.as_ref());
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .context("Failed to decompress gzip data")?;
        Ok(decompressed)
    }

    #[cfg(not(feature = "compression-gzip"))]
    fn decompress_gzip(_data: Bytes) -> Result<Vec<u8>> {
        anyhow::bail!("gzip support is disabled; rebuild with the compression-gzip feature")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let data = Bytes::from_static(b"#EXTM3U\n#EXTINF:-1,A\nhttp://a/b.ts\n");
        assert_eq!(
            DecompressionService::detect_compression_format(&data),
            CompressionFormat::Uncompressed
        );
        assert_eq!(DecompressionService::decompress(data.clone()).unwrap(), data.to_vec());
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn test_gzip_round_trip() {
        use flate2::{Compression, write::GzEncoder};
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"#EXTM3U\n").unwrap();
        let compressed = Bytes::from(encoder.finish().unwrap());

        assert_eq!(
            DecompressionService::detect_compression_format(&compressed),
            CompressionFormat::Gzip
        );
        assert_eq!(
            DecompressionService::decompress(compressed).unwrap(),
            b"#EXTM3U\n".to_vec()
        );
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn test_truncated_gzip_is_an_error() {
        use flate2::{Compression, write::GzEncoder};
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"#EXTM3U\n#EXTINF:-1,A\nhttp://a/b.ts\n").unwrap();
        let compressed = encoder.finish().unwrap();
        let truncated = Bytes::copy_from_slice(&compressed[..compressed.len() / 2]);

        assert!(DecompressionService::decompress(truncated).is_err());
    }
}
