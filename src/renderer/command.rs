//! The draw-command vocabulary the core emits each frame.
//!
//! Commands say what to draw (shape, position, color, order). How pixels
//! get lit is the business of whatever [`RenderBackend`] executes them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
///
/// Serializes as a `#RRGGBBAA` hex string; `#RRGGBB` is accepted on input
/// and taken as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack `0xRRGGBBAA`.
    #[must_use]
    pub const fn from_rgba_u32(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Pack into `0xRRGGBBAA`.
    #[must_use]
    pub const fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Move each RGB channel toward 255 by fraction `t`. The result is
    /// opaque.
    #[must_use]
    pub fn lighten(self, t: f32) -> Self {
        let up = |c: u8| -> u8 {
            let c = f32::from(c);
            (c + (255.0 - c) * t).clamp(0.0, 255.0) as u8
        };
        Self::rgb(up(self.r), up(self.g), up(self.b))
    }

    /// Scale each RGB channel by `1 - t`. The result is opaque.
    #[must_use]
    pub fn darken(self, t: f32) -> Self {
        let down =
            |c: u8| -> u8 { (f32::from(c) * (1.0 - t)).clamp(0.0, 255.0) as u8 };
        Self::rgb(down(self.r), down(self.g), down(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || format!("expected #RRGGBB or #RRGGBBAA, got '{s}'");
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        match hex.len() {
            6 => Ok(Self::from_rgba_u32((value << 8) | 0xFF)),
            8 => Ok(Self::from_rgba_u32(value)),
            _ => Err(bad()),
        }
    }
}

/// Axis-aligned screen rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// One drawing instruction for the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear {
        /// Fill color.
        color: Color,
    },
    /// Restrict subsequent drawing to `rect`.
    ClipRect {
        /// Clip region.
        rect: Rect,
    },
    /// Remove the clip region.
    ResetClip,
    /// Fill a rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Outline a rectangle with a one-pixel border.
    StrokeRect {
        /// Rectangle to outline.
        rect: Rect,
        /// Border color.
        color: Color,
    },
    /// Filled circle.
    FillCircle {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
        /// Opacity applied on top of `color`.
        alpha: u8,
    },
    /// Thick line segment.
    StrokeLine {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
        /// Stroke width in pixels.
        thickness: f32,
        /// Stroke color.
        color: Color,
        /// Opacity applied on top of `color`.
        alpha: u8,
    },
    /// Short text label with its top-left corner at `(x, y)`.
    Label {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Text to draw.
        text: &'static str,
        /// Text color.
        color: Color,
    },
}

/// Executes draw commands onto some surface.
pub trait RenderBackend {
    /// Execute a single command.
    fn execute(&mut self, command: &DrawCommand);

    /// Execute a frame's commands in order.
    fn submit(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.execute(command);
        }
    }
}

/// Records commands instead of drawing them.
impl RenderBackend for Vec<DrawCommand> {
    fn execute(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks() {
        let c = Color::from_rgba_u32(0xE74C_3CFF);
        assert_eq!((c.r, c.g, c.b, c.a), (0xE7, 0x4C, 0x3C, 0xFF));
        assert_eq!(c.to_rgba_u32(), 0xE74C_3CFF);
    }

    #[test]
    fn lighten_and_darken() {
        let c = Color::from_rgba_u32(0x6432_0080);
        assert_eq!(c.lighten(0.0), Color::rgb(100, 50, 0));
        assert_eq!(c.lighten(1.0), Color::WHITE);
        assert_eq!(c.lighten(0.5), Color::rgb(177, 152, 127));
        assert_eq!(c.darken(0.5), Color::rgb(50, 25, 0));
        assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn hex_string_round_trip() {
        let c = Color::from_rgba_u32(0x1DD1_A1FF);
        assert_eq!(c.to_string(), "#1DD1A1FF");
        assert_eq!(Color::try_from("#1DD1A1".to_owned()), Ok(c));
        assert_eq!(Color::try_from("1dd1a1ff".to_owned()), Ok(c));
        assert!(Color::try_from("#12345".to_owned()).is_err());
        assert!(Color::try_from("#+1234567".to_owned()).is_err());
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let cmd = DrawCommand::FillCircle {
            x: 1.0,
            y: 2.0,
            radius: 3.0,
            color: Color::rgb(255, 0, 0),
            alpha: 200,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["op"], "fill_circle");
        assert_eq!(json["color"], "#FF0000FF");
        assert_eq!(json["alpha"], 200);
    }

    #[test]
    fn vec_backend_records_in_order() {
        let frame = vec![
            DrawCommand::Clear {
                color: Color::rgb(0, 0, 0),
            },
            DrawCommand::ResetClip,
        ];
        let mut recorded: Vec<DrawCommand> = Vec::new();
        recorded.submit(&frame);
        assert_eq!(recorded, frame);
    }
}
