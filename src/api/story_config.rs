use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotLayout, ScaleTuning, Viewport};
use crate::data::DEFAULT_RATE_CEILING;
use crate::error::{StoryError, StoryResult};

/// Callout placed on the overview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    #[serde(default = "default_annotation_cause")]
    pub cause: String,
    #[serde(default = "default_annotation_year")]
    pub year: i32,
    #[serde(default = "default_annotation_label")]
    pub label: String,
    #[serde(default = "default_annotation_offset_x")]
    pub offset_x: f64,
    #[serde(default = "default_annotation_offset_y")]
    pub offset_y: f64,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            cause: default_annotation_cause(),
            year: default_annotation_year(),
            label: default_annotation_label(),
            offset_x: default_annotation_offset_x(),
            offset_y: default_annotation_offset_y(),
        }
    }
}

/// Story bootstrap configuration.
///
/// Every field has a default, so `{}` is a valid config document and hosts can
/// override only what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_rate_ceiling")]
    pub rate_ceiling: f64,
    /// Causes drawn on the overview; they also take the first palette colors.
    #[serde(default = "default_highlighted_causes")]
    pub highlighted_causes: Vec<String>,
    #[serde(default)]
    pub annotation: AnnotationConfig,
    #[serde(default = "default_focus_year")]
    pub focus_year: i32,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_overview_headroom")]
    pub overview_headroom: f64,
    #[serde(default = "default_bar_headroom")]
    pub bar_headroom: f64,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_tooltip_offset_x")]
    pub tooltip_offset_x: f64,
    #[serde(default = "default_tooltip_offset_y")]
    pub tooltip_offset_y: f64,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            rate_ceiling: default_rate_ceiling(),
            highlighted_causes: default_highlighted_causes(),
            annotation: AnnotationConfig::default(),
            focus_year: default_focus_year(),
            top_n: default_top_n(),
            overview_headroom: default_overview_headroom(),
            bar_headroom: default_bar_headroom(),
            band_padding: default_band_padding(),
            tick_count: default_tick_count(),
            tooltip_offset_x: default_tooltip_offset_x(),
            tooltip_offset_y: default_tooltip_offset_y(),
        }
    }
}

impl StoryConfig {
    /// Sets the drawing surface size.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_focus_year(mut self, year: i32) -> Self {
        self.focus_year = year;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationConfig) -> Self {
        self.annotation = annotation;
        self
    }

    /// Checks ranges that serde cannot express.
    pub fn validate(&self) -> StoryResult<()> {
        PlotLayout::new(self.viewport, self.margins)?;
        if !self.rate_ceiling.is_finite() || self.rate_ceiling <= 0.0 {
            return Err(StoryError::InvalidConfig(format!(
                "rate_ceiling must be finite and > 0, got {}",
                self.rate_ceiling
            )));
        }
        for (name, headroom) in [
            ("overview_headroom", self.overview_headroom),
            ("bar_headroom", self.bar_headroom),
        ] {
            if !headroom.is_finite() || headroom < 1.0 {
                return Err(StoryError::InvalidConfig(format!(
                    "{name} must be finite and >= 1, got {headroom}"
                )));
            }
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(StoryError::InvalidConfig(format!(
                "band_padding must be in [0, 1), got {}",
                self.band_padding
            )));
        }
        if self.top_n == 0 {
            return Err(StoryError::InvalidConfig("top_n must be > 0".to_owned()));
        }
        if self.tick_count == 0 {
            return Err(StoryError::InvalidConfig(
                "tick_count must be > 0".to_owned(),
            ));
        }
        let offsets = [
            self.annotation.offset_x,
            self.annotation.offset_y,
            self.tooltip_offset_x,
            self.tooltip_offset_y,
        ];
        if offsets.iter().any(|offset| !offset.is_finite()) {
            return Err(StoryError::InvalidConfig(
                "annotation and tooltip offsets must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Plot layout derived from viewport and margins.
    pub fn layout(&self) -> StoryResult<PlotLayout> {
        PlotLayout::new(self.viewport, self.margins)
    }

    #[must_use]
    pub fn overview_tuning(&self) -> ScaleTuning {
        ScaleTuning {
            headroom: self.overview_headroom,
            band_padding: self.band_padding,
        }
    }

    #[must_use]
    pub fn bar_tuning(&self) -> ScaleTuning {
        ScaleTuning {
            headroom: self.bar_headroom,
            band_padding: self.band_padding,
        }
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> StoryResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StoryError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> StoryResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| StoryError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| {
            StoryError::InvalidConfig(format!("failed to read `{}`: {e}", path.display()))
        })?;
        Self::from_json_str(&input)
    }
}

fn default_rate_ceiling() -> f64 {
    DEFAULT_RATE_CEILING
}

fn default_highlighted_causes() -> Vec<String> {
    vec!["Heart Disease".to_owned(), "Cancer".to_owned()]
}

fn default_annotation_cause() -> String {
    "Heart Disease".to_owned()
}

fn default_annotation_year() -> i32 {
    1960
}

fn default_annotation_label() -> String {
    "Heart Disease peaks (1960)".to_owned()
}

fn default_annotation_offset_x() -> f64 {
    -30.0
}

fn default_annotation_offset_y() -> f64 {
    -40.0
}

fn default_focus_year() -> i32 {
    2017
}

fn default_top_n() -> usize {
    5
}

fn default_overview_headroom() -> f64 {
    1.05
}

fn default_bar_headroom() -> f64 {
    1.1
}

fn default_band_padding() -> f64 {
    0.3
}

fn default_tick_count() -> usize {
    10
}

fn default_tooltip_offset_x() -> f64 {
    5.0
}

fn default_tooltip_offset_y() -> f64 {
    -30.0
}
