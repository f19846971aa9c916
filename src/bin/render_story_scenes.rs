use std::fs;
use std::path::{Path, PathBuf};

use mortality_story::api::{StoryConfig, StoryController};
use mortality_story::data::DataSource;
use mortality_story::render::SvgRenderer;
use mortality_story::scene::Scene;

const DEFAULT_DATA_PATH: &str =
    "data/nchs-age-adjusted-death-rates-for-selected-major-causes-of-death.csv";
const DEFAULT_OUTPUT_DIR: &str = "target/story_scenes";

#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    config_path: Option<PathBuf>,
    output_dir: PathBuf,
}

fn main() {
    let _ = mortality_story::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => StoryConfig::from_path(path).map_err(|err| err.to_string())?,
        None => StoryConfig::default(),
    };
    let data = DataSource::load_with_ceiling(&args.data_path, config.rate_ceiling)
        .map_err(|err| err.to_string())?;
    println!(
        "loaded {} record(s), {} cause(s), {} discarded",
        data.len(),
        data.cause_count(),
        data.discarded()
    );

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let mut story = StoryController::new(data, config, SvgRenderer::new())
        .map_err(|err| format!("failed to start story: {err}"))?;
    for (position, scene) in Scene::ALL.iter().enumerate() {
        if position > 0 {
            story
                .on_next()
                .map_err(|err| format!("failed to advance to `{}`: {err}", scene.slug()))?;
        }
        let stem = format!("{:02}-{}", scene.index() + 1, scene.slug());
        let svg_path = args.output_dir.join(format!("{stem}.svg"));
        fs::write(&svg_path, story.renderer().last_document())
            .map_err(|err| format!("failed to write `{}`: {err}", svg_path.display()))?;
        let summary = story.last_summary();
        println!(
            "{} -> {} (series={}, bars={}, hover_targets={}, annotation={})",
            scene.slug(),
            svg_path.display(),
            summary.series_drawn,
            summary.bars_drawn,
            summary.hover_targets,
            summary.annotation_drawn
        );

        write_png(&story, &args.output_dir, &stem)?;
    }

    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    story: &StoryController<SvgRenderer>,
    output_dir: &Path,
    stem: &str,
) -> Result<(), String> {
    use mortality_story::render::{CairoRenderer, Renderer};

    let viewport = story.layout().viewport();
    let width = i32::try_from(viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    renderer
        .render(story.frame())
        .map_err(|err| format!("cairo render failed: {err}"))?;

    let png_path = output_dir.join(format!("{stem}.png"));
    let mut file = fs::File::create(&png_path)
        .map_err(|err| format!("failed to create png `{}`: {err}", png_path.display()))?;
    renderer
        .write_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", png_path.display()))?;
    println!("  png -> {}", png_path.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _story: &StoryController<SvgRenderer>,
    _output_dir: &Path,
    _stem: &str,
) -> Result<(), String> {
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path = PathBuf::from(DEFAULT_DATA_PATH);
    let mut config_path: Option<PathBuf> = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        data_path,
        config_path,
        output_dir,
    })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_story_scenes -- [options]\n\nOptions:\n  --data <path>         Mortality CSV (default: {DEFAULT_DATA_PATH})\n  --config <path>       StoryConfig JSON (default: built-in defaults)\n  --output-dir <path>   Where scene SVGs are written (default: {DEFAULT_OUTPUT_DIR})\n  -h, --help            Show this message\n\nBuild with `--features cairo-backend` to also write PNGs."
    )
}
