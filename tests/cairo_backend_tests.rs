#![cfg(feature = "cairo-backend")]

use mortality_story::api::{StoryConfig, StoryController};
use mortality_story::data::DataSource;
use mortality_story::render::CairoRenderer;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mortality_sample.csv");

#[test]
fn cairo_renderer_paints_every_scene() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let renderer = CairoRenderer::new(800, 400).expect("cairo renderer");
    let mut story = StoryController::new(data, StoryConfig::default(), renderer).expect("story");

    let stats = story.renderer().last_stats();
    assert_eq!(stats.series_drawn, 2);
    assert!(stats.texts_drawn > 0);

    story.on_next().expect("to top five");
    assert_eq!(story.renderer().last_stats().bars_drawn, 5);

    story.on_next().expect("to all causes");
    assert_eq!(story.renderer().last_stats().series_drawn, 6);

    let mut png = Vec::new();
    story.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn zero_sized_surface_is_rejected() {
    assert!(CairoRenderer::new(0, 400).is_err());
}
