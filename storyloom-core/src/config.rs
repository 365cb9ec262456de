use std::time::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub script_path: String,
    pub log_path:    String,
    pub log_level:   String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub reveal_interval_ms: u64, // per revealed character
    pub frame_ms:           u64, // launcher polling granularity
}

impl SystemConfig {
    /// Section `[system]` of the global config store.
    pub fn from_global() -> Self {
        storyloom_shared::config::get("system")
    }
}

impl PlayerConfig {
    /// Section `[player]` of the global config store.
    pub fn from_global() -> Self {
        storyloom_shared::config::get("player")
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            script_path: "game/story.loom".into(),
            log_path:    "logs/".into(),
            log_level:   "info".into(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 30,
            frame_ms: 15,
        }
    }
}
