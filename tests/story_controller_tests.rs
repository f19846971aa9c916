use mortality_story::api::{NavigationState, StoryConfig, StoryController};
use mortality_story::data::DataSource;
use mortality_story::interaction::{HoverKey, HoverTransition};
use mortality_story::render::{NullRenderer, SvgRenderer, TextRole};
use mortality_story::scene::Scene;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mortality_sample.csv");

fn story() -> StoryController<NullRenderer> {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    StoryController::new(data, StoryConfig::default(), NullRenderer::default())
        .expect("story init")
}

#[test]
fn construction_renders_and_presents_first_scene() {
    let story = story();
    assert_eq!(story.current_scene(), Scene::Overview);
    assert_eq!(story.renderer().frames_rendered, 1);
    assert_eq!(story.renderer().last_series_count, 2);
    assert_eq!(story.last_summary().scene, Scene::Overview);
}

#[test]
fn navigation_visibility_follows_scene_index() {
    let mut story = story();
    assert_eq!(
        story.navigation(),
        NavigationState {
            back_visible: false,
            next_visible: true
        }
    );

    story.on_next().expect("next");
    assert_eq!(
        story.navigation(),
        NavigationState {
            back_visible: true,
            next_visible: true
        }
    );

    story.on_next().expect("next");
    story.on_next().expect("next at end");
    assert_eq!(story.current_scene(), Scene::AllCauses);
    assert_eq!(
        story.navigation(),
        NavigationState {
            back_visible: true,
            next_visible: false
        }
    );
}

#[test]
fn saturated_clicks_still_rerender() {
    let mut story = story();
    story.on_back().expect("back at start");
    assert_eq!(story.current_scene(), Scene::Overview);
    assert_eq!(story.renderer().frames_rendered, 2);
}

#[test]
fn clear_then_render_leaves_only_current_scene_marks() {
    let mut story = story();
    story.on_next().expect("to top five");

    let frame = story.frame();
    assert!(frame.series.is_empty());
    assert_eq!(frame.bars.len(), 5);
    assert!(frame.circles.is_empty());
    assert!(frame.rects.is_empty());
    assert!(frame.hover_targets.is_empty());
    let titles = frame
        .texts
        .iter()
        .filter(|text| text.role == TextRole::Title)
        .count();
    assert_eq!(titles, 1);

    story.on_next().expect("to all causes");
    let frame = story.frame();
    assert!(frame.bars.is_empty());
    assert!(
        !frame
            .texts
            .iter()
            .any(|text| text.role == TextRole::Legend || text.role == TextRole::Annotation)
    );
    assert_eq!(frame.series.len(), story.data().cause_count());

    story.on_back().expect("back to top five");
    story.on_back().expect("back to overview");
    assert_eq!(story.frame().series.len(), 2);
    assert!(story.frame().hover_targets.is_empty());
}

#[test]
fn cause_colors_are_stable_across_scenes() {
    let mut story = story();
    let overview_cancer = story
        .frame()
        .series
        .iter()
        .find(|series| series.cause == "Cancer")
        .map(|series| series.color)
        .expect("cancer line");

    story.on_next().expect("to top five");
    let bar_cancer = story
        .frame()
        .bars
        .iter()
        .find(|bar| bar.cause == "Cancer")
        .map(|bar| bar.rect.fill_color)
        .expect("cancer bar");

    story.on_next().expect("to all causes");
    let all_cancer = story
        .frame()
        .series
        .iter()
        .find(|series| series.cause == "Cancer")
        .map(|series| series.color)
        .expect("cancer line");

    assert_eq!(overview_cancer, bar_cancer);
    assert_eq!(bar_cancer, all_cancer);
    assert_eq!(all_cancer, story.colors().color("Cancer"));
}

#[test]
fn hover_shows_and_hides_tooltip_in_all_causes() {
    let mut story = story();
    story.on_next().expect("to top five");
    story.on_next().expect("to all causes");

    let layout = story.layout();
    let target = story
        .frame()
        .hover_targets
        .iter()
        .find(|target| target.cause == "Stroke" && target.year == 1960)
        .cloned()
        .expect("stroke 1960 target");
    let (x, y) = layout.plot_to_surface(target.center);

    let transition = story.on_pointer_move(x, y).expect("pointer move");
    assert!(matches!(
        transition,
        HoverTransition::Entered { ref entered, left: None }
            if entered == &HoverKey { cause: "Stroke".to_owned(), year: 1960 }
    ));
    let tooltip = story.frame().tooltip.clone().expect("tooltip visible");
    assert_eq!(tooltip.heading, "Stroke");
    assert_eq!(tooltip.lines, vec!["Year: 1960", "Rate: 177.9"]);
    assert!((tooltip.anchor.x - (target.center.x + 5.0)).abs() <= 1e-9);
    assert!((tooltip.anchor.y - (target.center.y - 30.0)).abs() <= 1e-9);
    assert!(story.renderer().last_tooltip_visible);

    let same = story.on_pointer_move(x + 0.5, y).expect("small move");
    assert_eq!(same, HoverTransition::Unchanged);

    let left = story.on_pointer_move(-50.0, -50.0).expect("move away");
    assert!(matches!(left, HoverTransition::Left(_)));
    assert!(story.frame().tooltip.is_none());
    assert!(!story.renderer().last_tooltip_visible);
}

#[test]
fn pointer_leave_and_navigation_drop_the_tooltip() {
    let mut story = story();
    story.on_next().expect("to top five");
    story.on_next().expect("to all causes");
    let center = story.frame().hover_targets[0].center;
    let (x, y) = story.layout().plot_to_surface(center);

    story.on_pointer_move(x, y).expect("enter");
    assert!(story.frame().tooltip.is_some());
    assert!(matches!(
        story.on_pointer_leave().expect("leave"),
        HoverTransition::Left(_)
    ));
    assert!(story.frame().tooltip.is_none());

    story.on_pointer_move(x, y).expect("enter again");
    story.on_back().expect("navigate");
    assert!(story.frame().tooltip.is_none());
    assert!(story.hover().active().is_none());
}

#[test]
fn hover_is_inert_outside_all_causes() {
    let mut story = story();
    let before = story.renderer().frames_rendered;
    let transition = story.on_pointer_move(300.0, 200.0).expect("pointer move");
    assert_eq!(transition, HoverTransition::Unchanged);
    assert_eq!(story.renderer().frames_rendered, before);
}

#[test]
fn svg_renderer_receives_each_scene() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let mut story = StoryController::new(data, StoryConfig::default(), SvgRenderer::new())
        .expect("story init");
    assert!(story.renderer().last_document().contains("Heart Disease vs. Cancer"));

    story.on_next().expect("to top five");
    let document = story.renderer().last_document();
    assert!(document.contains("Top 5 Causes of Death in 2017"));
    assert_eq!(document.matches("class=\"bar\"").count(), 5);
    assert!(!document.contains("class=\"series\""));

    let svg = story.into_renderer().into_document();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn invalid_config_is_rejected_before_rendering() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let mut config = StoryConfig::default();
    config.band_padding = 1.5;
    assert!(StoryController::new(data, config, NullRenderer::default()).is_err());
}
