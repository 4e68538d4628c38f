//! Catalog service
//!
//! Implements the add-on resources on top of the playlist parser: downloads
//! the playlist a client points at, parses it and maps the records onto the
//! wire types. Nothing is cached; every call fetches and parses again.

use std::sync::Arc;
use tracing::{error, info};

use crate::config::AddonConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    CatalogResponse, Manifest, MetaPreview, MetaResponse, Stream,
    StreamRecord, StreamResponse, source_url_from_identifier,
};
use crate::sources::parse_playlist_with_prefix;
use crate::utils::{PlaylistFetcher, UrlUtils};

/// Extra arguments a client sends along with a resource request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraArgs {
    /// Playlist to load
    pub url: Option<String>,
}

impl ExtraArgs {
    pub fn with_url<S: Into<String>>(url: S) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    fn playlist_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

#[derive(Clone)]
pub struct CatalogService {
    fetcher: Arc<dyn PlaylistFetcher>,
    addon: AddonConfig,
    manifest: Arc<Manifest>,
}

impl CatalogService {
    pub fn new(fetcher: Arc<dyn PlaylistFetcher>, addon: AddonConfig) -> Self {
        let manifest = Arc::new(Manifest::from_config(&addon));
        Self {
            fetcher,
            addon,
            manifest,
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Fetch and parse the playlist at `url`
    pub async fn load_records(&self, url: &str) -> AppResult<Vec<StreamRecord>> {
        UrlUtils::parse_http_url(url).map_err(AppError::validation)?;

        let text = self.fetcher.fetch_text(url.trim()).await?;
        let records = parse_playlist_with_prefix(&text, &self.addon.id_prefix)?;

        info!(
            "Loaded {} streams from {}",
            records.len(),
            UrlUtils::obfuscate_credentials(url)
        );
        Ok(records)
    }

    pub async fn catalog(
        &self,
        content_type: &str,
        id: &str,
        extra: &ExtraArgs,
    ) -> AppResult<CatalogResponse> {
        info!(content_type, id, "Catalog request");

        if id != self.addon.catalog_id {
            return Err(AppError::UnsupportedCatalog { id: id.to_string() });
        }
        let url = extra.playlist_url().ok_or(AppError::MissingPlaylistUrl)?;

        let records = self.load_records(url).await.inspect_err(|e| {
            error!("Failed to load or parse M3U playlist: {}", e);
        })?;

        let metas = records
            .iter()
            .map(|record| MetaPreview::from_record(record, &self.addon.content_type))
            .collect();

        Ok(CatalogResponse { metas })
    }

    /// Streams for an identifier; ids from other namespaces get an empty list
    pub fn streams(&self, content_type: &str, id: &str) -> StreamResponse {
        info!(content_type, id, "Stream request");

        match source_url_from_identifier(&self.addon.id_prefix, id) {
            Some(url) => StreamResponse {
                streams: vec![Stream {
                    url: url.to_string(),
                    title: None,
                }],
            },
            None => StreamResponse::default(),
        }
    }

    /// Meta detail for an identifier
    ///
    /// With a playlist URL the entry is looked up in the playlist; without
    /// one the meta is derived from the identifier alone.
    pub async fn meta(
        &self,
        content_type: &str,
        id: &str,
        extra: &ExtraArgs,
    ) -> AppResult<MetaResponse> {
        info!(content_type, id, "Meta request");

        let source_url = source_url_from_identifier(&self.addon.id_prefix, id)
            .ok_or_else(|| AppError::not_found("meta", id))?;

        let record = match extra.playlist_url() {
            Some(url) => self
                .load_records(url)
                .await?
                .into_iter()
                .find(|record| record.identifier == id)
                .ok_or_else(|| AppError::not_found("meta", id))?,
            None => StreamRecord {
                identifier: id.to_string(),
                display_name: UrlUtils::last_path_segment(source_url).to_string(),
                logo: None,
                group_label: None,
                source_url: source_url.to_string(),
            },
        };

        Ok(MetaResponse {
            meta: MetaPreview::from_record(&record, &self.addon.content_type),
        })
    }
}
