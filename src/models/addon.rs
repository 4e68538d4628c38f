//! Wire types of the add-on protocol
//!
//! These are the JSON bodies a Stremio-style client expects from the
//! manifest, catalog, meta and stream resources. Field names are camelCase
//! on the wire.

use serde::{Deserialize, Serialize};

use super::stream_record::StreamRecord;
use crate::config::AddonConfig;

pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/300x450";
pub const PLACEHOLDER_BACKGROUND_URL: &str = "https://via.placeholder.com/1280x720";

/// Genre used for entries without a `group-title`
pub const DEFAULT_GENRE: &str = "M3U Stream";

/// Add-on manifest, built once at start-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub catalogs: Vec<CatalogDescriptor>,
    pub id_prefixes: Vec<String>,
    pub behavior_hints: BehaviorHints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub extra: Vec<ExtraField>,
}

/// Extra argument a catalog accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraField {
    pub name: String,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    pub configurable: bool,
}

impl Manifest {
    pub fn from_config(addon: &AddonConfig) -> Self {
        Self {
            id: addon.id.clone(),
            version: addon.version.clone(),
            name: addon.name.clone(),
            description: addon.description.clone(),
            resources: vec!["catalog".to_string(), "meta".to_string(), "stream".to_string()],
            types: vec![addon.content_type.clone()],
            catalogs: vec![CatalogDescriptor {
                id: addon.catalog_id.clone(),
                name: addon.catalog_name.clone(),
                content_type: addon.content_type.clone(),
                extra: vec![ExtraField {
                    name: "url".to_string(),
                    is_required: true,
                    description: Some(
                        "M3U playlist URL (e.g. https://example.com/playlist.m3u)".to_string(),
                    ),
                }],
            }],
            id_prefixes: vec![addon.id_prefix.clone()],
            behavior_hints: BehaviorHints::default(),
        }
    }
}

/// Catalog entry shown in the client's browse view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    pub poster: String,
    pub background: String,
    pub logo: String,
    pub description: String,
    pub genres: Vec<String>,
}

impl MetaPreview {
    pub fn from_record(record: &StreamRecord, content_type: &str) -> Self {
        let (poster, background, logo) = if let Some(logo) = &record.logo {
            (logo.clone(), logo.clone(), logo.clone())
        } else {
            (
                PLACEHOLDER_POSTER_URL.to_string(),
                PLACEHOLDER_BACKGROUND_URL.to_string(),
                record.logo_url().to_string(),
            )
        };

        let description = match &record.group_label {
            Some(group) => format!("Stream from M3U list - Group: {group}"),
            None => "Stream from M3U list".to_string(),
        };

        Self {
            id: record.identifier.clone(),
            content_type: content_type.to_string(),
            name: record.display_name.clone(),
            poster,
            background,
            logo,
            description,
            genres: vec![
                record
                    .group_label
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GENRE.to_string()),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub meta: MetaPreview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamResponse {
    pub streams: Vec<Stream>,
}
