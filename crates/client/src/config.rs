//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use quiz_peer::DEFAULT_PEER_HOST;

/// Client-wide configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Local quiz database file. `None` falls back to the bundled one.
    pub db_path: Option<PathBuf>,
    /// Domain suffix under which community quizzes are hosted.
    pub peer_host: String,
    /// Log directory override. `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
    pub messages: MessageConfig,
    pub ui: UiConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            peer_host: DEFAULT_PEER_HOST.to_string(),
            log_dir: None,
            messages: MessageConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `QUIZ_DB_PATH` - Path to a quiz database JSON file (default: bundled)
    /// - `QUIZ_PEER_HOST` - Host suffix for community quiz URLs (default: "vercel.app")
    /// - `QUIZ_LOG_DIR` - Log directory (default: platform cache directory)
    /// - `QUIZ_MESSAGE_CAPACITY` - Notice log capacity (default: 16)
    /// - `QUIZ_CONTENT_WIDTH` - Width of the centered content column (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("QUIZ_DB_PATH") {
            config.db_path = Some(path);
        }
        if let Some(host) = read_env::<String>("QUIZ_PEER_HOST") {
            config.peer_host = host;
        }
        if let Some(dir) = read_env::<PathBuf>("QUIZ_LOG_DIR") {
            config.log_dir = Some(dir);
        }
        if let Some(capacity) = read_env::<usize>("QUIZ_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(width) = read_env::<u16>("QUIZ_CONTENT_WIDTH") {
            config.ui.content_width = width.max(UiConfig::MIN_CONTENT_WIDTH);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 16 }
    }
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of the centered content column, in terminal cells.
    pub content_width: u16,
}

impl UiConfig {
    /// Narrower than this and the question widget becomes unreadable.
    pub const MIN_CONTENT_WIDTH: u16 = 40;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { content_width: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_db_and_public_host() {
        let config = ClientConfig::default();

        assert!(config.db_path.is_none());
        assert_eq!(config.peer_host, DEFAULT_PEER_HOST);
        assert!(config.log_dir.is_none());
        assert_eq!(config.messages.capacity, 16);
        assert_eq!(config.ui.content_width, 64);
    }
}
