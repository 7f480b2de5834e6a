use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Initial display toggles and the turntable rate.
pub struct DisplayOptions {
    /// Start in wireframe instead of solid ball-and-stick.
    #[schemars(title = "Wireframe")]
    pub wireframe: bool,
    /// Start with turntable auto-rotation enabled.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotate yaw rate in radians per second.
    #[schemars(title = "Yaw Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub auto_rotate_yaw_speed: f32,
    /// Auto-rotate pitch rate in radians per second.
    #[schemars(title = "Pitch Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub auto_rotate_pitch_speed: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            wireframe: false,
            auto_rotate: true,
            auto_rotate_yaw_speed: 0.7,
            auto_rotate_pitch_speed: 0.25,
        }
    }
}

impl DisplayOptions {
    /// (yaw, pitch) turntable rate.
    #[must_use]
    pub fn auto_rotate_speed(&self) -> Vec2 {
        Vec2::new(self.auto_rotate_yaw_speed, self.auto_rotate_pitch_speed)
    }
}
