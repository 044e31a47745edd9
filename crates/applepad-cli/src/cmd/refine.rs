use super::{load_raw, parse_style};
use crate::reports;
use applepad_client::BackendClient;
use applepad_core::config::Config;
use applepad_core::error::{PadError, PadResult};
use applepad_core::normalize::normalize;
use applepad_core::params::ParamGroup;
use applepad_core::refine::{refinement_prompt, RefinementPass};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Args;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RefineArgs {
    #[command(flatten)]
    pub config: Config,

    /// Style of the image being refined.
    #[arg(short, long)]
    pub style: String,

    /// Parameter group to adjust: material, spatial or color.
    #[arg(short, long)]
    pub axis: ParamGroup,

    /// Sliders behind the current image.
    #[arg(long)]
    pub before: String,

    /// Sliders after the adjustment; only the refined group is read.
    #[arg(long)]
    pub after: String,

    /// The current image.
    #[arg(long)]
    pub image: String,

    #[arg(short, long, default_value = "refined.png")]
    pub output: String,
}

pub async fn run(args: RefineArgs, config: &Config) -> PadResult<()> {
    let style = parse_style(&args.style)?;
    let p_0 = normalize(&load_raw(&args.before)?);
    let pass = RefinementPass::new(args.axis, style.name(), p_0);
    let p_1 = pass.read(&load_raw(&args.after)?);

    let deltas = pass.deltas(&p_1);
    reports::print_delta_report(&deltas, config.study.delta_threshold);

    let image = fs::read(&args.image)?;
    let client =
        BackendClient::new(&config.endpoints).map_err(|e| PadError::Config(e.to_string()))?;
    let result = client.refine(&pass.request(p_1, STANDARD.encode(&image))).await;

    let prompt = result
        .refinement_prompt
        .clone()
        .unwrap_or_else(|| {
            refinement_prompt(style.name(), args.axis, &deltas, config.study.delta_threshold)
        });
    println!("\n{}\n", prompt);
    println!("{}", result.outcome.user_message());

    if let Some(bytes) = result.outcome.image_bytes() {
        fs::write(&args.output, bytes)?;
        info!("Saved refined image to {}", args.output);
    }
    Ok(())
}
