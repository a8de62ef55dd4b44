//! Pager tunables
//!
//! Every threshold and curve parameter the pager uses is a named field
//! here, persisted in `~/.config/filmstrip/config.yaml`. The defaults are
//! the behaviorally-tested values; hosts normally ship them unchanged.

use serde::{Deserialize, Serialize};

/// Policy constants for gestures, transitions and loading feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Fixed gap between the current image and a neighbor, in pixels
    pub image_gap: i32,
    /// Drag distance (plus centering gap) past which a release snaps to a
    /// neighbor, in pixels
    pub switch_threshold: i32,
    /// Horizontal fling velocity past which a swipe switches images
    pub swipe_velocity_threshold: f32,
    /// Debounce before loading feedback shows a spinner, in milliseconds
    pub loading_spinner_delay_ms: u64,
    /// How long a pinch may sit in the over-zoom range before it is
    /// force-cancelled, in milliseconds
    pub extra_scaling_timeout_ms: u64,
    /// Scale an image shrinks to as it slides fully out of view
    pub transition_scale_factor: f32,
    /// Accelerating-ease factor for the slide-out fade (exponent is twice
    /// this value)
    pub alpha_ease_factor: f32,
    /// Focal length of the perspective-shrink curve
    pub scale_focal_length: f32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            image_gap: 96,
            switch_threshold: 256,
            swipe_velocity_threshold: 300.0,
            loading_spinner_delay_ms: 250,
            extra_scaling_timeout_ms: 700,
            transition_scale_factor: 0.74,
            alpha_ease_factor: 0.9,
            scale_focal_length: 0.5,
        }
    }
}

impl PagerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a YAML config document
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = crate::config_paths::ensure_config_dir()?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(dir.join("config.yaml"), content)?;
        Ok(())
    }
}
