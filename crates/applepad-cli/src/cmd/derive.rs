use super::{load_raw, local_library, parse_style};
use crate::reports;
use applepad_core::api::derive;
use applepad_core::config::Config;
use applepad_core::error::PadResult;
use applepad_core::prompt::PromptBuilder;
use clap::Args;
use fastrand::Rng;
use serde_json::json;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file of raw slider values.
    pub input: String,

    /// Style to build the prompt for; must be one of the band's pair.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Local style library JSON.
    #[arg(short, long)]
    pub library: Option<String>,

    /// Seed for the coin-flip style choice.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: DeriveArgs, config: &Config) -> PadResult<()> {
    let raw = load_raw(&args.input)?;
    let derivation = derive(&raw);

    let style = match &args.style {
        Some(name) => {
            let style = parse_style(name)?;
            if !derivation.candidates.contains(style) {
                warn!(
                    "{} is outside the {} pair, building its prompt anyway",
                    style,
                    derivation.band
                );
            }
            style
        }
        None => {
            let mut rng = args.seed.map(Rng::with_seed).unwrap_or_else(Rng::new);
            derivation.pick_style(config.study.style_choice, &mut rng)
        }
    };

    let library = local_library(args.library.as_deref());
    let builder = PromptBuilder::new(&config.study.scene);
    let prompt = derivation.prompt_for(style, &builder, library.get());

    if args.json {
        let out = json!({
            "derivation": derivation,
            "style": style,
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_derivation(&derivation);
        println!("\nStyle: {}\n\n{}", style, prompt);
    }
    Ok(())
}
