use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{SearchEntry, VideoSummary};
use crate::render::{render_page, PageContext};

use super::AppState;

/// Entry count requested from the extractor for every listing call.
const SEARCH_REQUEST_COUNT: usize = 100;
/// Cap on cards shown on the home page.
const RECOMMENDED_DISPLAY_CAP: usize = 6;
/// Cap on cards shown on the results page.
const SEARCH_DISPLAY_CAP: usize = 100;
/// Generic query used to populate the recommended grid.
const RECOMMENDATIONS_QUERY: &str = " ";

// Request parameter types

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchParams {
    #[serde(default)]
    pub url: Option<String>,
}

/// Filter flat entries down to playable videos, cap, and map to summaries.
fn summarize(entries: Vec<SearchEntry>, cap: usize) -> Vec<VideoSummary> {
    entries
        .into_iter()
        .filter(SearchEntry::is_video)
        .take(cap)
        .map(VideoSummary::from)
        .collect()
}

// Handlers

/// Home page with a fixed-size recommended grid
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let entries = state
        .extractor
        .search(RECOMMENDATIONS_QUERY, SEARCH_REQUEST_COUNT)
        .await
        .map_err(|e| AppError::Extractor(format!("Error fetching recommended videos: {}", e)))?;

    let recommended = summarize(entries, RECOMMENDED_DISPLAY_CAP);
    tracing::info!(shown = recommended.len(), "Rendering recommended videos");

    Ok(Html(render_page(&PageContext {
        recommended_videos: Some(recommended),
        ..Default::default()
    })))
}

/// Search results page
///
/// A missing or empty `query` is rejected before the extractor is called. An
/// extractor success with zero qualifying entries is not an error: the page
/// echoes the query with an explicit no-results notice.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Html<String>> {
    let query = match params.query {
        Some(q) if !q.is_empty() => q,
        _ => return Err(AppError::MissingInput("No query provided".to_string())),
    };

    let entries = state
        .extractor
        .search(&query, SEARCH_REQUEST_COUNT)
        .await
        .map_err(|e| AppError::Extractor(format!("Error searching for videos: {}", e)))?;

    let videos = summarize(entries, SEARCH_DISPLAY_CAP);
    tracing::info!(query = %query, results = videos.len(), "Search handled");

    let ctx = PageContext {
        videos: if videos.is_empty() {
            None
        } else {
            Some(videos)
        },
        query: Some(query),
        ..Default::default()
    };

    Ok(Html(render_page(&ctx)))
}

/// Player page for one resolved video
pub async fn watch(
    State(state): State<AppState>,
    Query(params): Query<WatchParams>,
) -> AppResult<Html<String>> {
    let url = match params.url {
        Some(u) if !u.is_empty() => u,
        _ => return Err(AppError::MissingInput("No URL provided".to_string())),
    };

    let resolution = state
        .extractor
        .resolve_playback(&url)
        .await
        .map_err(|e| AppError::Extractor(format!("Error fetching video: {}", e)))?;

    Ok(Html(render_page(&PageContext {
        video_url: Some(resolution.video_url),
        ..Default::default()
    })))
}
