//! Invitation content and tuning, loaded from `invitation.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::{default_events, WeddingEvent};
use crate::countdown::{Countdown, DEFAULT_TARGET};
use crate::error::{InvitationError, InvitationResult};
use crate::gallery::{BatchConfig, TileImage, TileMarkup, VisibilityMode, BATCH_DELAY, BATCH_SIZE};
use crate::music::BackgroundMusic;
use crate::rsvp::WISH_ENDPOINT;
use crate::viewport::ProximityConfig;

/// File name of the config inside the data directory.
pub const CONFIG_FILE: &str = "invitation.json";

const GALLERY_PHOTOS: usize = 9;
const HERO_SLIDES: usize = 3;

/// Everything the page shows that is not markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    pub groom: String,
    pub bride: String,
    /// RFC 3339 ceremony time the countdown runs to
    pub countdown_target: String,
    pub events: Vec<WeddingEvent>,
    pub gallery: Vec<TileMarkup>,
    pub slides: Vec<String>,
    pub wish_endpoint: String,
    pub batch_size: usize,
    pub batch_delay_ms: u64,
    /// Reveal the gallery without viewport tracking
    pub reveal_all: bool,
    pub falling_hearts: bool,
    /// Looping track played behind the page; `null` for silence
    pub background_music: Option<String>,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            groom: "Minh Tình".to_string(),
            bride: "Thị Lài".to_string(),
            countdown_target: DEFAULT_TARGET.to_string(),
            events: default_events(),
            gallery: (1..=GALLERY_PHOTOS)
                .map(|i| {
                    TileMarkup::with_image(
                        TileImage::new(format!("assets/gallery/anh-{i:02}.jpg"))
                            .with_alt(format!("Ảnh cưới {i}")),
                    )
                })
                .collect(),
            slides: (1..=HERO_SLIDES)
                .map(|i| format!("assets/slides/slide-{i}.jpg"))
                .collect(),
            wish_endpoint: WISH_ENDPOINT.to_string(),
            batch_size: BATCH_SIZE,
            batch_delay_ms: BATCH_DELAY.as_millis() as u64,
            reveal_all: false,
            falling_hearts: true,
            background_music: Some("assets/music/nhac-cuoi.mp3".to_string()),
        }
    }
}

impl InvitationConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> InvitationResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            InvitationError::Config(format!("{}: {e}", path.display()))
        })?;
        config.countdown()?;

        info!(path = %path.display(), events = config.events.len(), "Loaded invitation config");
        Ok(config)
    }

    /// Load `invitation.json` from a data directory.
    pub fn load_from_dir(data_dir: impl AsRef<Path>) -> InvitationResult<Self> {
        Self::load(config_path(data_dir))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> InvitationResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    pub fn countdown(&self) -> InvitationResult<Countdown> {
        Countdown::parse(&self.countdown_target)
    }

    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            batch_size: self.batch_size.max(1),
            batch_delay: Duration::from_millis(self.batch_delay_ms),
            visibility: if self.reveal_all {
                VisibilityMode::Unavailable
            } else {
                VisibilityMode::Proximity(ProximityConfig::lazy_load())
            },
        }
    }

    pub fn music(&self) -> BackgroundMusic {
        BackgroundMusic::new(self.background_music.as_deref())
    }

    pub fn couple(&self) -> String {
        format!("{} & {}", self.groom, self.bride)
    }
}

pub fn config_path(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = InvitationConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, InvitationConfig::default());
        assert_eq!(config.batch_config(), BatchConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            config_path(temp.path()),
            r#"{ "groom": "Anh", "batch_size": 5, "reveal_all": true }"#,
        )
        .unwrap();

        let config = InvitationConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.groom, "Anh");
        assert_eq!(config.bride, "Thị Lài");
        assert_eq!(config.events.len(), 2);
        assert_eq!(config.batch_config().batch_size, 5);
        assert_eq!(config.batch_config().visibility, VisibilityMode::Unavailable);
    }

    #[test]
    fn test_null_music_disables_playback() {
        let temp = TempDir::new().unwrap();
        std::fs::write(config_path(temp.path()), r#"{ "background_music": null }"#).unwrap();

        let config = InvitationConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.music().source(), None);
        assert_eq!(
            InvitationConfig::default().music().source(),
            Some("assets/music/nhac-cuoi.mp3")
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(config_path(temp.path()), "{ not json").unwrap();
        assert!(matches!(
            InvitationConfig::load_from_dir(temp.path()),
            Err(InvitationError::Config(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILE);
        let mut config = InvitationConfig::default();
        config.slides.clear();
        config.save(&path).unwrap();
        assert_eq!(InvitationConfig::load(&path).unwrap(), config);
    }
}
