use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the yt-dlp binary
    #[serde(default = "default_ytdlp_bin")]
    pub ytdlp_bin: String,

    /// Wall-clock limit for a single extractor invocation, in seconds.
    /// Unset means no explicit limit (the extractor's own defaults apply).
    #[serde(default)]
    pub extractor_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_ytdlp_bin() -> String {
    "yt-dlp".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("VIDEOSNOW_")
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: Config = envy::prefixed("VIDEOSNOW_TEST_NONE_")
            .from_iter(std::iter::empty::<(String, String)>())
            .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.ytdlp_bin, "yt-dlp");
        assert_eq!(config.extractor_timeout_secs, None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let vars = vec![
            ("VIDEOSNOW_PORT".to_string(), "8080".to_string()),
            ("VIDEOSNOW_YTDLP_BIN".to_string(), "/opt/yt-dlp".to_string()),
            (
                "VIDEOSNOW_EXTRACTOR_TIMEOUT_SECS".to_string(),
                "30".to_string(),
            ),
        ];
        let config: Config = envy::prefixed("VIDEOSNOW_").from_iter(vars).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.ytdlp_bin, "/opt/yt-dlp");
        assert_eq!(config.extractor_timeout_secs, Some(30));
    }
}
