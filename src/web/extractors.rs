//! Request extractors
//!
//! Resource routes look like `/{resource}/{type}/{id}.json`, optionally with
//! an extra segment: `/{resource}/{type}/{id}/{extra}.json`. The extra
//! segment is a form-encoded argument list (`url=http%3A%2F%2F...`).

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::ExtraArgs;

const JSON_SUFFIX: &str = ".json";

#[derive(Debug, Deserialize)]
struct ResourcePath {
    content_type: String,
    id: String,
    #[serde(default)]
    extra: Option<String>,
}

/// Parsed resource request: content type, bare id and extra arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub content_type: String,
    pub id: String,
    pub extra: ExtraArgs,
}

impl<S> FromRequestParts<S> for ResourceRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path) = Path::<ResourcePath>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        let query = parse_extra(parts.uri.query().unwrap_or_default());

        let (id, extra) = match path.extra {
            None => (strip_json_suffix(&path.id)?, query),
            Some(_) => {
                // Path params come percent-decoded; decode the raw segment exactly once instead
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                let path_extra = parse_extra(&strip_json_suffix(raw)?);
                let extra = ExtraArgs {
                    url: path_extra.url.or(query.url),
                };
                (path.id, extra)
            }
        };

        Ok(Self {
            content_type: path.content_type,
            id,
            extra,
        })
    }
}

fn strip_json_suffix(segment: &str) -> Result<String, AppError> {
    segment
        .strip_suffix(JSON_SUFFIX)
        .map(str::to_string)
        .ok_or_else(|| AppError::not_found("resource", segment))
}

/// Parse a form-encoded extra segment such as `url=http%3A%2F%2Fhost%2Flist.m3u`
///
/// Unknown keys are ignored and the first `url` wins. Never fails.
pub fn parse_extra(segment: &str) -> ExtraArgs {
    let url = url::form_urlencoded::parse(segment.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned());
    ExtraArgs { url }
}
