use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Window size and tile grid geometry, in pixels.
pub struct LayoutOptions {
    /// Drawable width.
    #[schemars(title = "Window Width", range(min = 320, max = 7680))]
    pub window_width: u32,
    /// Drawable height.
    #[schemars(title = "Window Height", range(min = 240, max = 4320))]
    pub window_height: u32,
    /// Tiles per grid row.
    #[schemars(title = "Columns", range(min = 1, max = 20))]
    pub columns: u32,
    /// Gap around and between tiles.
    #[schemars(title = "Padding", range(min = 0, max = 64))]
    pub padding: u32,
    /// Inset of the focus viewport from the window edge.
    #[schemars(title = "Focus Margin", range(min = 0, max = 200))]
    pub focus_margin: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            window_width: 1600,
            window_height: 900,
            columns: 5,
            padding: 14,
            focus_margin: 20,
        }
    }
}
