//! mortality-story: a three-scene narrative over age-adjusted death rates.
//!
//! The crate loads the mortality dataset once, walks a fixed sequence of
//! scenes (two-cause overview, top causes of one year, every cause with hover
//! details) and hands retained frames to a pluggable `Renderer` backend.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{StoryConfig, StoryController};
pub use data::DataSource;
pub use error::{LoadError, StoryError, StoryResult};
