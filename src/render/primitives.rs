use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(raw: &str) -> ChartResult<Self> {
        let digits = raw.strip_prefix('#').unwrap_or(raw);
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{raw}`"));
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        let (red, green, blue, alpha) = match digits.len() {
            3 => {
                let expand = |index: usize| channel(&digits[index..=index].repeat(2));
                (expand(0)?, expand(1)?, expand(2)?, u8::MAX)
            }
            6 | 8 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    u8::MAX
                },
            ),
            _ => return Err(invalid()),
        };

        Ok(Self::rgb8(red, green, blue).with_alpha(f64::from(alpha) / 255.0))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off lengths, in pixels, of a dashed stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

impl DashPattern {
    #[must_use]
    pub const fn new(dash: f64, gap: f64) -> Self {
        Self { dash, gap }
    }

    #[must_use]
    pub fn segments(self) -> [f64; 2] {
        [self.dash, self.gap]
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.dash.is_finite() || !self.gap.is_finite() || self.dash < 0.0 || self.gap < 0.0 {
            return Err(ChartError::InvalidData(
                "dash pattern lengths must be finite and >= 0".to_owned(),
            ));
        }
        if self.dash + self.gap <= 0.0 {
            return Err(ChartError::InvalidData(
                "dash pattern must have a positive total length".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self::new(5.0, 3.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed(DashPattern),
}

impl LineStrokeStyle {
    #[must_use]
    pub fn is_dashed(self) -> bool {
        matches!(self, Self::Dashed(_))
    }
}

/// Stroked open polyline in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: Vec<PixelPoint>,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(points: Vec<PixelPoint>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    /// Two-point path, the common case for gridlines and axes.
    #[must_use]
    pub fn segment(from: PixelPoint, to: PixelPoint, stroke_width: f64, color: Color) -> Self {
        Self::new(vec![from, to], stroke_width, color)
    }

    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    #[must_use]
    pub fn first_point(&self) -> Option<PixelPoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last_point(&self) -> Option<PixelPoint> {
        self.points.last().copied()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "path must contain at least two points".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let LineStrokeStyle::Dashed(pattern) = self.stroke_style {
            pattern.validate()?;
        }
        self.color.validate()
    }
}

/// Filled circle, used for point markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: PixelPoint, radius: f64, fill_color: Color) -> Self {
        Self {
            center,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the alphabetic baseline of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One immediate-mode drawing operation; frames replay these in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Path(PathPrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}
