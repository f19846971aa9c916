pub mod axis;
mod canvas;
mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod svg_backend;

pub use canvas::{Annotation, ChartCanvas, FrameCanvas, Legend, LegendEntry};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{CATEGORY10, CategoryColorScale, UNKNOWN_CAUSE_COLOR};
pub use primitives::{
    BarPrimitive, CirclePrimitive, Color, HoverTarget, LinePrimitive, RectPrimitive, SeriesPath,
    TextHAlign, TextPrimitive, TextRole, TextVAlign, TooltipPrimitive,
};
pub use svg_backend::{SvgRenderer, frame_to_svg};

use crate::error::StoryResult;

/// Contract implemented by any presentation backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from scene selection, data filtering and hover handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> StoryResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
