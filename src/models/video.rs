use serde::{Deserialize, Serialize};

/// Canonical watch-page prefix used to recognize plain video entries that
/// carry no type tag in flat extractor output.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Placeholder title for entries the extractor returned without one.
const DEFAULT_TITLE: &str = "No Title";

/// A video card as rendered on the home and search pages.
///
/// Derived per request from one raw extractor entry and discarded after
/// rendering; nothing here outlives the response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoSummary {
    pub url: String,
    pub title: String,
    /// Highest-resolution thumbnail URL, or empty when the entry had none.
    pub thumbnail: String,
    pub channel: String,
}

/// A resolved direct media URL for one video.
///
/// Valid only for the lifetime of the upstream signed link; the expiry policy
/// belongs to the platform, not to this service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackResolution {
    pub video_url: String,
}

/// One entry of the extractor's flat search output.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchEntry {
    #[serde(rename = "_type", default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Ordered low-to-high resolution by extractor convention.
    #[serde(default)]
    pub thumbnails: Vec<ThumbnailInfo>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// One thumbnail descriptor within a search entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ThumbnailInfo {
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw extractor output for a single-video resolution pass.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackInfo {
    #[serde(default)]
    pub url: Option<String>,
}

impl SearchEntry {
    /// Whether this entry is a playable video rather than a playlist, channel,
    /// or other container. Flat search output tags some entries `"video"` and
    /// leaves others recognizable only by their watch-page URL.
    pub fn is_video(&self) -> bool {
        self.entry_type.as_deref() == Some("video")
            || self
                .url
                .as_deref()
                .is_some_and(|url| url.starts_with(WATCH_URL_PREFIX))
    }

    /// Highest-resolution thumbnail URL: the list is ordered low-to-high, so
    /// take the last descriptor. Empty string when there is none.
    fn best_thumbnail(&self) -> String {
        self.thumbnails
            .last()
            .and_then(|t| t.url.clone())
            .unwrap_or_default()
    }
}

impl From<SearchEntry> for VideoSummary {
    fn from(entry: SearchEntry) -> Self {
        let thumbnail = entry.best_thumbnail();
        Self {
            url: entry.url.unwrap_or_default(),
            title: entry.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            thumbnail,
            channel: entry.channel.unwrap_or_default(),
        }
    }
}
