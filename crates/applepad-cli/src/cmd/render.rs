use super::load_raw;
use crate::sketch::{self, SketchStep};
use applepad_core::config::Config;
use applepad_core::error::PadResult;
use applepad_core::normalize::normalize;
use applepad_core::stroke::{StrokeRenderer, StrokeStyle};
use clap::Args;
use fastrand::Rng;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file of raw slider values.
    pub input: String,

    #[arg(short, long, default_value = "apple.svg")]
    pub output: String,

    #[arg(long, value_enum, default_value_t = SketchStep::Color)]
    pub step: SketchStep,

    /// Fixes the stroke scatter so repeated renders match.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: RenderArgs, config: &Config) -> PadResult<()> {
    let raw = load_raw(&args.input)?;
    let params = normalize(&raw);
    let pen = StrokeStyle::from_raw(&raw);
    let canvas = config.canvas.canvas();

    let mut renderer = match args.seed {
        Some(seed) => StrokeRenderer::with_rng(Rng::with_seed(seed)),
        None => StrokeRenderer::new(),
    };

    let doc = sketch::render(args.step, &params, &pen, &canvas, &mut renderer);
    svg::save(&args.output, &doc)?;
    info!("Wrote {:?} sketch to {}", args.step, args.output);
    Ok(())
}
