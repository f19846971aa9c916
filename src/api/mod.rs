mod hover_controller;
mod story_accessors;
mod story_config;
mod story_controller;

pub use story_config::{AnnotationConfig, StoryConfig};
pub use story_controller::{NavigationState, StoryController};
