mod band_scale;
mod bar_series;
mod chart_frame;
mod line_series;
mod record;
mod scale;
pub mod ticks;
mod types;

pub use band_scale::BandScale;
pub use bar_series::{BarGeometry, project_bars};
pub use chart_frame::{ChartFrame, ScaleMode, ScaleTuning, XScale};
pub use line_series::project_series;
pub use record::MortalityRecord;
pub use scale::LinearScale;
pub use types::{Margins, PlotLayout, PlotPoint, Viewport};
