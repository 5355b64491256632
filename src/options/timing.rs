use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Frame pacing.
pub struct TimingOptions {
    /// Fixed integration step in milliseconds, applied once per frame.
    pub tick_ms: u32,
    /// Frame limiter target; 0 disables the limiter.
    pub target_fps: u32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            target_fps: 60,
        }
    }
}
