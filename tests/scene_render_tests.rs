use approx::assert_relative_eq;
use mortality_story::api::StoryConfig;
use mortality_story::core::{MortalityRecord, PlotLayout};
use mortality_story::data::{DEFAULT_RATE_CEILING, DataSource};
use mortality_story::render::{CategoryColorScale, ChartCanvas, FrameCanvas, TextRole};
use mortality_story::scene::{
    HOVER_TARGET_RADIUS_PX, Scene, SceneContext, render_all_causes, render_overview,
    render_scene, render_top_five,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mortality_sample.csv");

fn colors_for(data: &DataSource, config: &StoryConfig) -> CategoryColorScale {
    CategoryColorScale::seeded(
        config.highlighted_causes.iter().map(String::as_str),
        data.causes(),
    )
}

fn title_of(canvas: &FrameCanvas) -> Option<&str> {
    canvas.frame().title()
}

#[test]
fn overview_draws_highlighted_lines_in_year_order() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let config = StoryConfig::default();
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };
    let mut canvas = FrameCanvas::new(layout);

    let summary = render_overview(&context, &mut canvas).expect("render overview");

    assert_eq!(summary.series_drawn, 2);
    assert!(summary.annotation_drawn);
    assert_eq!(
        title_of(&canvas),
        Some("Heart Disease vs. Cancer (1900\u{2013}2017)")
    );

    let frame = canvas.frame();
    let heart = frame
        .series
        .iter()
        .find(|series| series.cause == "Heart Disease")
        .expect("heart disease line");
    assert_eq!(heart.points.len(), 5);
    assert!(heart.points.windows(2).all(|pair| pair[0].x < pair[1].x));
    assert_relative_eq!(heart.points[0].x, 0.0);
    assert_relative_eq!(heart.points[4].x, layout.plot_width(), epsilon = 1e-9);
    assert_relative_eq!(heart.stroke_width, 2.0);
    assert_eq!(heart.color, colors.color("Heart Disease"));
}

#[test]
fn overview_annotation_points_at_anchor_record() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let config = StoryConfig::default();
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };
    let mut canvas = FrameCanvas::new(layout);
    render_overview(&context, &mut canvas).expect("render overview");

    let frame = canvas.frame();
    let anchor = context
        .default_frame()
        .expect("default frame")
        .project(data.find("Heart Disease", 1960).expect("anchor record"))
        .expect("project anchor");

    let marker = frame.circles.first().expect("annotation marker");
    assert_relative_eq!(marker.cx, anchor.x, epsilon = 1e-9);
    assert_relative_eq!(marker.cy, anchor.y, epsilon = 1e-9);
    assert_relative_eq!(marker.radius, 2.0);

    let label = frame
        .texts
        .iter()
        .find(|text| text.role == TextRole::Annotation)
        .expect("annotation label");
    assert_eq!(label.text, "Heart Disease peaks (1960)");
    assert_relative_eq!(label.x, anchor.x - 35.0, epsilon = 1e-9);
    assert_relative_eq!(label.y, anchor.y - 45.0, epsilon = 1e-9);

    let legend: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.role == TextRole::Legend)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(legend, vec!["Heart Disease", "Cancer"]);
    let swatch = frame.rects.first().expect("legend swatch");
    assert_relative_eq!(swatch.x, layout.plot_width() - 120.0, epsilon = 1e-9);
    assert_relative_eq!(swatch.y, 20.0);
}

#[test]
fn overview_skips_annotation_when_anchor_is_missing() {
    let data = DataSource::from_records(
        vec![
            MortalityRecord::new(1950, "Heart Disease", 586.8),
            MortalityRecord::new(1970, "Heart Disease", 492.7),
            MortalityRecord::new(1950, "Cancer", 193.9),
        ],
        DEFAULT_RATE_CEILING,
    )
    .expect("records");
    let config = StoryConfig::default();
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };
    let mut canvas = FrameCanvas::new(layout);

    let summary = render_overview(&context, &mut canvas).expect("render overview");

    assert!(!summary.annotation_drawn);
    assert!(canvas.frame().circles.is_empty());
    assert!(
        !canvas
            .frame()
            .texts
            .iter()
            .any(|text| text.role == TextRole::Annotation)
    );
    assert_eq!(summary.series_drawn, 2);
}

#[test]
fn top_five_orders_bars_by_rate_and_drops_the_rest() {
    let records = [("A", 50.0), ("B", 80.0), ("C", 30.0), ("D", 90.0), ("E", 10.0), ("F", 5.0)]
        .into_iter()
        .map(|(cause, rate)| MortalityRecord::new(2017, cause, rate))
        .chain(std::iter::once(MortalityRecord::new(2016, "Z", 500.0)));
    let data = DataSource::from_records(records, DEFAULT_RATE_CEILING).expect("records");
    let config = StoryConfig::default();
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };
    let mut canvas = FrameCanvas::new(layout);

    let summary = render_top_five(&context, &mut canvas).expect("render top five");

    assert_eq!(summary.bars_drawn, 5);
    assert_eq!(title_of(&canvas), Some("Top 5 Causes of Death in 2017"));
    let bars = &canvas.frame().bars;
    let order: Vec<&str> = bars.iter().map(|bar| bar.cause.as_str()).collect();
    assert_eq!(order, vec!["D", "B", "A", "C", "E"]);
    assert!(bars.windows(2).all(|pair| pair[0].rect.x < pair[1].rect.x));

    // y domain is [0, 1.1 * 90], so the tallest bar stops short of the top.
    let tallest = &bars[0];
    assert_relative_eq!(
        tallest.rect.y,
        layout.plot_height() * (1.0 - 90.0 / 99.0),
        epsilon = 1e-9
    );
    assert_relative_eq!(tallest.rect.y + tallest.rect.height, layout.plot_height(), epsilon = 1e-9);
    for bar in bars {
        assert_eq!(bar.rect.fill_color, colors.color(&bar.cause));
    }

    let tick_labels: Vec<&str> = canvas
        .frame()
        .texts
        .iter()
        .filter(|text| text.role == TextRole::TickLabel)
        .map(|text| text.text.as_str())
        .collect();
    assert!(tick_labels.contains(&"D"));
    assert!(!tick_labels.contains(&"F"));
}

#[test]
fn top_five_with_empty_focus_year_draws_axes_only() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let config = StoryConfig::default().with_focus_year(1850);
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };
    let mut canvas = FrameCanvas::new(layout);

    let summary = render_top_five(&context, &mut canvas).expect("render empty year");

    assert_eq!(summary.bars_drawn, 0);
    assert!(canvas.frame().bars.is_empty());
    assert_eq!(title_of(&canvas), Some("Top 5 Causes of Death in 1850"));
    assert!(
        canvas
            .frame()
            .texts
            .iter()
            .any(|text| text.role == TextRole::AxisLabel && text.text == "Cause")
    );
}

#[test]
fn all_causes_draws_one_line_per_cause_with_hover_targets() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let config = StoryConfig::default();
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };
    let mut canvas = FrameCanvas::new(layout);

    let summary = render_all_causes(&context, &mut canvas).expect("render all causes");

    assert_eq!(summary.series_drawn, data.cause_count());
    assert_eq!(summary.hover_targets, data.len());
    assert_eq!(canvas.hover_targets().len(), data.len());
    assert!(
        canvas
            .hover_targets()
            .iter()
            .all(|target| (target.radius - HOVER_TARGET_RADIUS_PX).abs() <= f64::EPSILON)
    );

    let drawn: Vec<&str> = canvas
        .frame()
        .series
        .iter()
        .map(|series| series.cause.as_str())
        .collect();
    let expected: Vec<&str> = data.causes().collect();
    assert_eq!(drawn, expected);
    assert!(
        canvas
            .frame()
            .series
            .iter()
            .all(|series| (series.stroke_width - 1.2).abs() <= f64::EPSILON)
    );
    assert_eq!(
        title_of(&canvas),
        Some("All Causes Over Time (Hover for details)")
    );
}

#[test]
fn overview_and_all_causes_share_default_scales() {
    let data = DataSource::load(FIXTURE).expect("load fixture");
    let config = StoryConfig::default();
    let colors = colors_for(&data, &config);
    let layout = PlotLayout::default();
    let context = SceneContext {
        data: &data,
        layout,
        colors: &colors,
        config: &config,
    };

    let mut overview = FrameCanvas::new(layout);
    render_scene(Scene::Overview, &context, &mut overview).expect("overview");
    let mut all = FrameCanvas::new(layout);
    render_scene(Scene::AllCauses, &context, &mut all).expect("all causes");

    let in_overview = overview
        .frame()
        .series
        .iter()
        .find(|series| series.cause == "Cancer")
        .expect("cancer in overview");
    let in_all = all
        .frame()
        .series
        .iter()
        .find(|series| series.cause == "Cancer")
        .expect("cancer in all causes");
    assert_eq!(in_overview.points, in_all.points);
    assert_eq!(in_overview.color, in_all.color);
}
