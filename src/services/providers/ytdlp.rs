/// yt-dlp extractor
///
/// Runs the yt-dlp binary as a subprocess and parses its JSON output. Search
/// uses a single `-J --flat-playlist` invocation over the `ytsearchN:` pseudo
/// URL; playback resolution is a full (non-flat) pass over one video with
/// `-f best`. No retries: a failed invocation surfaces its stderr to the
/// caller.
use std::time::Duration;

use serde::Deserialize;
use tokio::process::Command;

use crate::{
    error::{AppError, AppResult},
    models::{PlaybackInfo, PlaybackResolution, SearchEntry},
    services::providers::MediaExtractor,
};

/// Flat search output: yt-dlp wraps search results in a playlist object.
/// `entries` can be absent entirely when the platform returns nothing.
#[derive(Debug, Deserialize)]
struct FlatSearchOutput {
    #[serde(default)]
    entries: Option<Vec<SearchEntry>>,
}

#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    bin: String,
    timeout: Option<Duration>,
}

impl YtDlpExtractor {
    pub fn new(bin: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    fn search_args(query: &str, count: usize) -> Vec<String> {
        vec![
            "-J".to_string(),
            "--flat-playlist".to_string(),
            "--no-warnings".to_string(),
            format!("ytsearch{}:{}", count, query),
        ]
    }

    fn playback_args(url: &str) -> Vec<String> {
        vec![
            "-j".to_string(),
            "--no-warnings".to_string(),
            "-f".to_string(),
            "best".to_string(),
            url.to_string(),
        ]
    }

    /// Run the binary to completion and return its stdout.
    async fn run(&self, args: &[String]) -> AppResult<String> {
        let mut command = Command::new(&self.bin);
        // If the timeout fires, dropping the future must not leave an
        // orphaned yt-dlp process behind.
        command.args(args).kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    AppError::Extractor(format!(
                        "{} timed out after {}s",
                        self.bin,
                        limit.as_secs()
                    ))
                })?,
            None => command.output().await,
        }
        .map_err(|e| AppError::Extractor(format!("failed to run {}: {}", self.bin, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(bin = %self.bin, status = %output.status, "Extractor exited with failure");
            return Err(AppError::Extractor(format!(
                "{} failed: {}",
                self.bin,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| AppError::Extractor(format!("{} produced invalid UTF-8: {}", self.bin, e)))
    }
}

#[async_trait::async_trait]
impl MediaExtractor for YtDlpExtractor {
    async fn search(&self, query: &str, count: usize) -> AppResult<Vec<SearchEntry>> {
        let stdout = self.run(&Self::search_args(query, count)).await?;

        let output: FlatSearchOutput = serde_json::from_str(&stdout).map_err(|e| {
            AppError::Extractor(format!("could not parse {} search output: {}", self.bin, e))
        })?;
        let entries = output.entries.unwrap_or_default();

        tracing::info!(
            query = %query,
            requested = count,
            entries = entries.len(),
            provider = self.name(),
            "Search completed"
        );

        Ok(entries)
    }

    async fn resolve_playback(&self, url: &str) -> AppResult<PlaybackResolution> {
        let stdout = self.run(&Self::playback_args(url)).await?;

        let info: PlaybackInfo = serde_json::from_str(&stdout).map_err(|e| {
            AppError::Extractor(format!("could not parse {} video output: {}", self.bin, e))
        })?;
        let video_url = info.url.ok_or_else(|| {
            AppError::Extractor("extractor output did not include a direct media URL".to_string())
        })?;

        tracing::info!(source = %url, provider = self.name(), "Playback URL resolved");

        Ok(PlaybackResolution { video_url })
    }

    fn name(&self) -> &'static str {
        "yt-dlp"
    }
}
