use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{StoryError, StoryResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

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

    /// Builds an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_u32(packed: u32) -> Self {
        Self::rgb(
            ((packed >> 16) & 0xff) as f64 / 255.0,
            ((packed >> 8) & 0xff) as f64 / 255.0,
            (packed & 0xff) as f64 / 255.0,
        )
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// `#rrggbb` form; alpha is carried separately by backends.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> StoryResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(StoryError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn ensure_finite(values: &[f64], what: &str) -> StoryResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(StoryError::InvalidData(format!("{what} must be finite")))
    }
}

/// Draw command for one line segment in plot space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> StoryResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StoryError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle with an optional border (`border_width == 0` disables it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> StoryResult<()> {
        ensure_finite(&[self.x, self.y], "rect origin")?;
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(StoryError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(StoryError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Circle mark; a transparent fill with zero stroke is legal (hit areas).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn outlined(cx: f64, cy: f64, radius: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color: Color::TRANSPARENT,
            stroke_width,
            stroke_color: color,
        }
    }

    pub fn validate(self) -> StoryResult<()> {
        ensure_finite(&[self.cx, self.cy], "circle center")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(StoryError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(StoryError::InvalidData(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Open polyline for one series (one cause).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub cause: String,
    pub points: Vec<PlotPoint>,
    pub stroke_width: f64,
    pub color: Color,
}

impl SeriesPath {
    #[must_use]
    pub fn new(
        cause: impl Into<String>,
        points: Vec<PlotPoint>,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            cause: cause.into(),
            points,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> StoryResult<()> {
        for point in &self.points {
            ensure_finite(&[point.x, point.y], "series point")?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StoryError::InvalidData(
                "series stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One bar of a categorical chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub cause: String,
    pub value: f64,
    pub rect: RectPrimitive,
}

impl BarPrimitive {
    pub fn validate(&self) -> StoryResult<()> {
        ensure_finite(&[self.value], "bar value")?;
        self.rect.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical placement relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    /// `y` is the alphabetic baseline.
    Baseline,
    Middle,
    /// `y` is the top of the glyphs.
    Top,
}

/// What a label is for; backends map this onto styling (class names, weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    Title,
    AxisLabel,
    TickLabel,
    Legend,
    Annotation,
}

/// Draw command for one label in plot space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    /// Clockwise rotation in degrees around `(x, y)`.
    pub rotation_deg: f64,
    pub role: TextRole,
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
            v_align: TextVAlign::Baseline,
            rotation_deg: 0.0,
            role: TextRole::Annotation,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> StoryResult<()> {
        if self.text.is_empty() {
            return Err(StoryError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y, self.rotation_deg], "text placement")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(StoryError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Invisible hover area attached to one data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub cause: String,
    pub year: i32,
    pub rate: f64,
    pub center: PlotPoint,
    pub radius: f64,
}

impl HoverTarget {
    #[must_use]
    pub fn contains(&self, point: PlotPoint) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    pub fn validate(&self) -> StoryResult<()> {
        ensure_finite(&[self.center.x, self.center.y, self.rate], "hover target")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(StoryError::InvalidData(
                "hover radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Floating details box. `anchor` is its top-left corner in plot space;
/// `highlight` is the hovered data point, ringed in `accent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPrimitive {
    pub anchor: PlotPoint,
    pub highlight: PlotPoint,
    pub accent: Color,
    pub heading: String,
    pub lines: Vec<String>,
}

impl TooltipPrimitive {
    pub fn validate(&self) -> StoryResult<()> {
        ensure_finite(
            &[
                self.anchor.x,
                self.anchor.y,
                self.highlight.x,
                self.highlight.y,
            ],
            "tooltip placement",
        )?;
        self.accent.validate()?;
        if self.heading.is_empty() {
            return Err(StoryError::InvalidData(
                "tooltip heading must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
