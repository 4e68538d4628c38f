//! M3U playlist parser
//!
//! Turns `#EXTM3U` playlist text into [`StreamRecord`]s. Every `#EXTINF:`
//! line is paired with the line directly below it; pairs whose second line is
//! not a usable URL are dropped without an error. The only hard failure is a
//! missing header.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::config::defaults::DEFAULT_ID_PREFIX;
use crate::errors::PlaylistError;
use crate::models::{FALLBACK_DISPLAY_NAME, StreamRecord};

pub const HEADER_TAG: &str = "#EXTM3U";
pub const EXTINF_TAG: &str = "#EXTINF:";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Case-insensitive matcher for one `name="value"` attribute
pub struct AttributePattern {
    regex: Option<Regex>,
}

impl AttributePattern {
    pub fn new(attr: &str) -> Self {
        let pattern = format!(r#"{}="([^"]*)""#, regex::escape(attr));
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .ok();
        Self { regex }
    }

    /// Value of the first occurrence in `line`, or an empty string
    pub fn extract(&self, line: &str) -> String {
        self.regex
            .as_ref()
            .and_then(|re| re.captures(line))
            .and_then(|captures| captures.get(1))
            .map(|value| value.as_str().to_string())
            .unwrap_or_default()
    }
}

/// Pull the quoted value of `attr` out of a metadata line
///
/// Matching is case-insensitive and the first occurrence wins. Quotes inside
/// a value cannot be escaped, so a value ends at the first `"`. A missing
/// attribute yields an empty string.
pub fn extract_attribute(line: &str, attr: &str) -> String {
    AttributePattern::new(attr).extract(line)
}

struct ExtinfAttributes {
    tvg_name: AttributePattern,
    tvg_logo: AttributePattern,
    group_title: AttributePattern,
}

impl ExtinfAttributes {
    fn new() -> Self {
        Self {
            tvg_name: AttributePattern::new("tvg-name"),
            tvg_logo: AttributePattern::new("tvg-logo"),
            group_title: AttributePattern::new("group-title"),
        }
    }
}

/// Parse playlist text using the default `m3uloader-` namespace
pub fn parse_playlist(text: &str) -> Result<Vec<StreamRecord>, PlaylistError> {
    parse_playlist_with_prefix(text, DEFAULT_ID_PREFIX)
}

/// Parse playlist text, building identifiers under `prefix`
///
/// Records come out in the order of their `#EXTINF:` lines. Identical URLs
/// produce identical identifiers; nothing is deduplicated.
pub fn parse_playlist_with_prefix(
    text: &str,
    prefix: &str,
) -> Result<Vec<StreamRecord>, PlaylistError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut lines = text.lines().peekable();

    if let Some(first) = lines.peek()
        && !first.starts_with(HEADER_TAG)
    {
        return Err(PlaylistError::Malformed);
    }

    let attributes = ExtinfAttributes::new();
    let mut records = Vec::new();
    let mut skipped = 0usize;

    while let Some(line) = lines.next() {
        let line = line.trim();
        if !line.starts_with(EXTINF_TAG) {
            continue;
        }

        match lines.peek().copied().map(str::trim) {
            Some(url) if is_stream_url(url) => {
                records.push(build_record(line, url, prefix, &attributes));
                lines.next();
            }
            // The candidate line is consumed even when it is unusable
            _ => {
                skipped += 1;
                lines.next();
            }
        }
    }

    debug!(
        records = records.len(),
        skipped_entries = skipped,
        "Parsed M3U playlist"
    );
    Ok(records)
}

fn is_stream_url(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

fn build_record(
    extinf: &str,
    url: &str,
    prefix: &str,
    attributes: &ExtinfAttributes,
) -> StreamRecord {
    let tvg_name = attributes.tvg_name.extract(extinf);
    let display_name = if tvg_name.is_empty() {
        title_of(extinf).unwrap_or(FALLBACK_DISPLAY_NAME).to_string()
    } else {
        tvg_name
    };

    let logo = Some(attributes.tvg_logo.extract(extinf)).filter(|l| !l.is_empty());

    let group_label = Some(attributes.group_title.extract(extinf)).filter(|g| !g.is_empty());

    StreamRecord {
        identifier: StreamRecord::identifier_for(prefix, url),
        display_name,
        logo,
        group_label,
        source_url: url.to_string(),
    }
}

/// Free-text title after the first comma, if any
///
/// Everything after that comma is the title, trimmed, so titles may contain
/// commas themselves.
fn title_of(extinf: &str) -> Option<&str> {
    extinf
        .split_once(',')
        .map(|(_, title)| title.trim())
        .filter(|title| !title.is_empty())
}
