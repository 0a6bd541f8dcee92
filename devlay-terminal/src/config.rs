/// Demo configuration loaded from JSON
use std::path::Path;

use anyhow::Context;
use devlay_core::{trig::wrap_angle, OverlayToggles};
use serde::{Deserialize, Serialize};

const MIN_PITCH: i32 = 128;
const MAX_PITCH: i32 = 512;
const MIN_SCALE: i32 = 20;
const MAX_SCALE: i32 = 400;
const MIN_DISTANCE: i32 = 300;
const MAX_DISTANCE: i32 = 4000;

/// Where the camera sits relative to the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub distance: i32,
    pub pitch: i32,
    pub yaw: i32,
    pub scale: i32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            distance: 1400,
            pitch: 320,
            yaw: 0,
            scale: 90,
        }
    }
}

impl OrbitSettings {
    /// Swing around the focus. Pitch stays between a shallow angle and
    /// straight down.
    pub fn rotate(&mut self, yaw_delta: i32, pitch_delta: i32) {
        self.yaw = wrap_angle(self.yaw + yaw_delta);
        self.pitch = (self.pitch + pitch_delta).clamp(MIN_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, scale_delta: i32) {
        self.scale = (self.scale + scale_delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn dolly(&mut self, distance_delta: i32) {
        self.distance = (self.distance + distance_delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub toggles: OverlayToggles,
    pub camera: OrbitSettings,
    /// Orientation units the spinning models turn per frame.
    pub spin_speed: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            toggles: OverlayToggles::default(),
            camera: OrbitSettings::default(),
            spin_speed: 16,
        }
    }
}

impl DemoConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
