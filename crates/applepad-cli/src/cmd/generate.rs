use super::{load_raw, local_library, parse_style};
use applepad_client::{BackendClient, TrialLogger};
use applepad_core::config::Config;
use applepad_core::error::{PadError, PadResult};
use applepad_core::session::Session;
use applepad_core::trial::LogCheckpoint;
use applepad_core::util::request_fingerprint;
use clap::Args;
use fastrand::Rng;
use std::fs;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file of raw slider values.
    pub input: String,

    /// Style to generate; defaults to the configured style choice.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Local style library JSON; fetched from the backend when omitted.
    #[arg(short, long)]
    pub library: Option<String>,

    /// Where to write the image; named after the request when omitted.
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, default_value = "unspecified")]
    pub age_range: String,
    #[arg(long, default_value = "unspecified")]
    pub gender: String,
    #[arg(long, default_value = "unspecified")]
    pub education: String,
}

pub async fn run(args: GenerateArgs, config: &Config) -> PadResult<()> {
    let raw = load_raw(&args.input)?;
    let client =
        BackendClient::new(&config.endpoints).map_err(|e| PadError::Config(e.to_string()))?;
    let logger = TrialLogger::new(config.endpoints.log_url.clone(), config.endpoints.log_timeout());

    let library = match &args.library {
        Some(path) => local_library(Some(path)),
        None => client.fetch_style_library().await,
    };

    let mut session = Session::new(&config.study);
    session.start(&args.age_range, &args.gender, &args.education)?;
    session.next();
    session.next();
    let pair = session.finish(&raw)?;

    let style = match &args.style {
        Some(name) => parse_style(name)?,
        None => session
            .derivation()
            .map(|d| d.pick_style(config.study.style_choice, &mut Rng::new()))
            .unwrap_or(pair.first),
    };
    info!("Offered {} | {}, generating {}", pair.first, pair.second, style);

    let request = session.choose_style(style, library.get())?;
    let outcome = client.generate(&request).await;
    let message = session.record_generation(outcome)?;
    println!("{}", message);

    if let Some(bytes) = session.image() {
        let path = args.output.clone().unwrap_or_else(|| {
            let params = request.params.unwrap_or_default();
            format!("applepad-{}.png", request_fingerprint(style.name(), &params))
        });
        fs::write(&path, bytes)?;
        info!("Saved image to {}", path);
    }

    if let Some(handle) = logger.submit(session.log_payload(LogCheckpoint::PostGeneration)) {
        if handle.await.is_err() {
            warn!("Trial logging task did not finish");
        }
    }
    Ok(())
}
