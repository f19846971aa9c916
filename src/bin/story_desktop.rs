use std::path::{Path, PathBuf};

use gtk4 as gtk;
use gtk4::prelude::*;
use mortality_story::api::{StoryConfig, StoryController};
use mortality_story::data::DataSource;
use mortality_story::platform_gtk::GtkStoryAdapter;
use mortality_story::render::CairoRenderer;

const DEFAULT_DATA_PATH: &str =
    "data/nchs-age-adjusted-death-rates-for-selected-major-causes-of-death.csv";

fn main() {
    let _ = mortality_story::telemetry::init_default_tracing();
    let data_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

    let app = gtk::Application::builder()
        .application_id("rs.mortality_story.desktop")
        .build();
    app.connect_activate(move |app| build_ui(app, &data_path));
    // GTK must not see our own positional argument.
    app.run_with_args::<&str>(&[]);
}

fn build_ui(app: &gtk::Application, data_path: &Path) {
    let story = match build_story(data_path) {
        Ok(story) => story,
        Err(err) => {
            eprintln!("failed to start story: {err}");
            return;
        }
    };

    let adapter = GtkStoryAdapter::new(story);
    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Causes of Death in the U.S.")
        .child(adapter.widget())
        .build();
    window.present();
}

fn build_story(data_path: &Path) -> Result<StoryController<CairoRenderer>, String> {
    let config = StoryConfig::default();
    let data = DataSource::load_with_ceiling(data_path, config.rate_ceiling)
        .map_err(|err| err.to_string())?;
    let viewport = config.viewport;
    let width = i32::try_from(viewport.width).map_err(|err| err.to_string())?;
    let height = i32::try_from(viewport.height).map_err(|err| err.to_string())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    StoryController::new(data, config, renderer).map_err(|err| err.to_string())
}
