/// Media extractor abstraction
///
/// This module provides a pluggable seam for the media-extraction collaborator
/// the handlers delegate to. The production implementation shells out to
/// yt-dlp; tests substitute their own implementations.
use crate::{
    error::AppResult,
    models::{PlaybackResolution, SearchEntry},
};

pub mod ytdlp;

/// Trait for media extractors
///
/// Extractors implement both bounded search (flat metadata, playlists
/// expanded) and single-video playback resolution. Each call is one
/// synchronous round trip to the collaborator; callers own filtering and
/// display caps.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Search for videos matching a free-text query.
    ///
    /// Requests up to `count` entries in flat mode: no per-video resolution
    /// pass, playlist and channel entries may appear alongside videos.
    async fn search(&self, query: &str, count: usize) -> AppResult<Vec<SearchEntry>>;

    /// Resolve one video reference to a direct playable media URL, using the
    /// best available combined audio/video format.
    async fn resolve_playback(&self, url: &str) -> AppResult<PlaybackResolution>;

    /// Extractor name for logging and debugging
    fn name(&self) -> &'static str;
}
