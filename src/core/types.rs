use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 400)
    }
}

/// Space reserved around the plot area for titles, axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 20.0,
            bottom: 60.0,
            left: 70.0,
        }
    }
}

/// Point in plot space (origin at the top-left corner of the plot area).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Fixed drawing surface: total viewport minus margins gives the plot area.
///
/// Every primitive produced by the scene renderers lives in plot space;
/// backends translate by `(margins.left, margins.top)` when presenting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    viewport: Viewport,
    margins: Margins,
}

impl PlotLayout {
    pub fn new(viewport: Viewport, margins: Margins) -> StoryResult<Self> {
        if !viewport.is_valid() {
            return Err(StoryError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        for (name, value) in [
            ("top", margins.top),
            ("right", margins.right),
            ("bottom", margins.bottom),
            ("left", margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StoryError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }

        let layout = Self { viewport, margins };
        if layout.plot_width() <= 0.0 || layout.plot_height() <= 0.0 {
            return Err(StoryError::InvalidData(
                "margins leave no room for the plot area".to_owned(),
            ));
        }
        Ok(layout)
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn margins(self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    /// Converts a surface coordinate (pointer position) into plot space.
    #[must_use]
    pub fn surface_to_plot(self, x: f64, y: f64) -> PlotPoint {
        PlotPoint::new(x - self.margins.left, y - self.margins.top)
    }

    #[must_use]
    pub fn plot_to_surface(self, point: PlotPoint) -> (f64, f64) {
        (point.x + self.margins.left, point.y + self.margins.top)
    }
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
        }
    }
}
