use criterion::{Criterion, criterion_group, criterion_main};
use mortality_story::api::{StoryConfig, StoryController};
use mortality_story::core::{
    ChartFrame, LinearScale, MortalityRecord, PlotLayout, ScaleMode, ScaleTuning, project_series,
};
use mortality_story::data::{DEFAULT_RATE_CEILING, DataSource};
use mortality_story::render::{NullRenderer, frame_to_svg};
use std::hint::black_box;

const CAUSES: [&str; 11] = [
    "Heart Disease",
    "Cancer",
    "Stroke",
    "Influenza and Pneumonia",
    "Unintentional Injuries",
    "Chronic Lower Respiratory Diseases",
    "Diabetes",
    "Alzheimer's Disease",
    "Kidney Disease",
    "Suicide",
    "Tuberculosis",
];

/// Full-size synthetic dataset: every cause for every year 1900..=2017.
fn synthetic_records() -> Vec<MortalityRecord> {
    CAUSES
        .iter()
        .enumerate()
        .flat_map(|(cause_index, cause)| {
            (1900..=2017).map(move |year| {
                let t = f64::from(year - 1900);
                let rate = 40.0 + cause_index as f64 * 35.0 + (t * 0.11).sin() * 25.0;
                MortalityRecord::new(year, *cause, rate)
            })
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(1900.0, 2017.0)
        .expect("valid scale")
        .with_range(0.0, 710.0)
        .expect("valid range");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(1960.0)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_series_projection_all_causes(c: &mut Criterion) {
    let data = DataSource::from_records(synthetic_records(), DEFAULT_RATE_CEILING)
        .expect("synthetic data");
    let frame = ChartFrame::scales(
        PlotLayout::default(),
        data.records(),
        ScaleMode::Continuous,
        ScaleTuning::default(),
    )
    .expect("frame");

    c.bench_function("series_projection_all_causes", |b| {
        b.iter(|| {
            for cause in data.causes() {
                let series = data.series(cause);
                let _ = project_series(black_box(&series), black_box(&frame))
                    .expect("projection should succeed");
            }
        })
    });
}

fn bench_story_walk_with_svg(c: &mut Criterion) {
    let data = DataSource::from_records(synthetic_records(), DEFAULT_RATE_CEILING)
        .expect("synthetic data");
    let mut story = StoryController::new(data, StoryConfig::default(), NullRenderer::default())
        .expect("story init");

    c.bench_function("story_walk_with_svg", |b| {
        b.iter(|| {
            story.on_next().expect("next");
            story.on_next().expect("next");
            let _ = frame_to_svg(black_box(story.frame())).expect("svg");
            story.on_back().expect("back");
            story.on_back().expect("back");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_series_projection_all_causes,
    bench_story_walk_with_svg
);
criterion_main!(benches);
