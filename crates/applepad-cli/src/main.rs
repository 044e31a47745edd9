use applepad_core::config::Config;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;
mod sketch;

#[derive(Parser, Debug)]
#[command(author, version, about = "Slider-to-style derivation for the ApplePad study", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; explicit command-line flags take precedence.
    #[arg(global = true, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize sliders, score them and show the style candidates and prompt.
    Derive(cmd::derive::DeriveArgs),
    /// Draw one study step to an SVG file.
    Render(cmd::render::RenderArgs),
    /// Run a full session against the image backend.
    Generate(cmd::generate::GenerateArgs),
    /// Send a targeted refinement of an existing image.
    Refine(cmd::refine::RefineArgs),
    /// Derive every row of a CSV of slider readings.
    Batch(cmd::batch::BatchArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let (cli_config, sub_name) = match &cli.command {
        Commands::Derive(args) => (&args.config, "derive"),
        Commands::Render(args) => (&args.config, "render"),
        Commands::Generate(args) => (&args.config, "generate"),
        Commands::Refine(args) => (&args.config, "refine"),
        Commands::Batch(args) => (&args.config, "batch"),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("Loading settings from {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Derive(args) => cmd::derive::run(args, &config),
        Commands::Render(args) => cmd::render::run(args, &config),
        Commands::Generate(args) => cmd::generate::run(args, &config).await,
        Commands::Refine(args) => cmd::refine::run(args, &config).await,
        Commands::Batch(args) => cmd::batch::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
