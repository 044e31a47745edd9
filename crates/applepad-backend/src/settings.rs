use applepad_core::consts::DELTA_DISPLAY_THRESHOLD;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Image generation proxy for the ApplePad study", long_about = None)]
pub struct Settings {
    /// Hosted text-to-image endpoint. Without one, the placeholder image is served.
    #[arg(long, env = "HF_ENDPOINT_URL")]
    pub hf_endpoint_url: Option<String>,

    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,

    #[arg(long, default_value_t = 8001)]
    pub port: u16,

    /// Directory served under `/static`.
    #[arg(long, short, default_value = "static")]
    pub data: PathBuf,

    /// Style library used to build prompts and served to the frontend.
    #[arg(long, default_value = "static/interior_style_library.json")]
    pub library: PathBuf,

    #[arg(long, default_value = "static/test_interior.png")]
    pub placeholder: PathBuf,

    /// Scene used when a request does not name one.
    #[arg(long, default_value = "living room")]
    pub scene: String,

    /// Smallest change named in a refinement prompt.
    #[arg(long, default_value_t = DELTA_DISPLAY_THRESHOLD)]
    pub delta_threshold: f64,

    #[arg(long, default_value_t = 120)]
    pub upstream_timeout_secs: u64,
}
