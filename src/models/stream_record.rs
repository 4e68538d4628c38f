use serde::{Deserialize, Serialize};

/// Display name used when an entry has neither `tvg-name` nor a title
pub const FALLBACK_DISPLAY_NAME: &str = "Unnamed Stream";

/// Logo used when an entry has no `tvg-logo`
pub const PLACEHOLDER_LOGO_URL: &str = "https://via.placeholder.com/300x300";

/// One playlist entry: an `#EXTINF:` line paired with the URL line below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Namespace prefix followed by the raw source URL
    pub identifier: String,
    pub display_name: String,
    /// `tvg-logo` value, `None` when the playlist gives none
    pub logo: Option<String>,
    pub group_label: Option<String>,
    pub source_url: String,
}

impl StreamRecord {
    /// Build the identifier for a source URL within a namespace
    pub fn identifier_for(prefix: &str, source_url: &str) -> String {
        format!("{prefix}{source_url}")
    }

    /// Logo to display: the playlist's own or the placeholder
    pub fn logo_url(&self) -> &str {
        self.logo.as_deref().unwrap_or(PLACEHOLDER_LOGO_URL)
    }
}

/// Recover the source URL from an identifier, `None` if it is outside the namespace
pub fn source_url_from_identifier<'a>(prefix: &str, identifier: &'a str) -> Option<&'a str> {
    identifier.strip_prefix(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_foreign_identifier_is_rejected() {
        assert_eq!(source_url_from_identifier("m3uloader-", "tt0111161"), None);
        assert_eq!(
            source_url_from_identifier("m3uloader-", "m3uloader-http://a/b.ts"),
            Some("http://a/b.ts")
        );
    }

    #[test]
    fn test_logo_url_falls_back_to_placeholder() {
        let mut record = StreamRecord {
            identifier: "m3uloader-http://a/b.ts".to_string(),
            display_name: "B".to_string(),
            logo: None,
            group_label: None,
            source_url: "http://a/b.ts".to_string(),
        };
        assert_eq!(record.logo_url(), PLACEHOLDER_LOGO_URL);

        record.logo = Some("http://x/b.png".to_string());
        assert_eq!(record.logo_url(), "http://x/b.png");
    }

    #[test]
    fn test_prefix_inside_url_is_preserved() {
        let url = "http://host/m3uloader-live.ts";
        let id = StreamRecord::identifier_for("m3uloader-", url);
        assert_eq!(source_url_from_identifier("m3uloader-", &id), Some(url));
    }

    proptest! {
        #[test]
        fn identifier_strips_back_to_url(url in "\\PC*") {
            let id = StreamRecord::identifier_for("m3uloader-", &url);
            prop_assert!(id.starts_with("m3uloader-"));
            prop_assert_eq!(source_url_from_identifier("m3uloader-", &id), Some(url.as_str()));
        }
    }
}
