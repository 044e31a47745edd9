use crate::consts::{DELTA_DISPLAY_THRESHOLD, MAX_CANVAS_SIDE};
use crate::error::{PadError, PadResult};
use crate::geometry::Canvas;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub endpoints: EndpointConfig,
    #[command(flatten)]
    pub canvas: CanvasConfig,
    #[command(flatten)]
    pub study: StudyConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    #[arg(long, default_value = "http://localhost:8001")]
    pub backend_url: String,
    #[arg(long, default_value = "/generate-image")]
    pub generate_path: String,
    #[arg(long, default_value = "/refine")]
    pub refine_path: String,
    /// Relative paths resolve against the backend URL.
    #[arg(long, default_value = "interior_style_library.json")]
    pub library_url: String,
    /// Trial logging is off when unset.
    #[arg(long)]
    pub log_url: Option<String>,

    // Bounded waits; a stalled backend must not hang the session.
    #[arg(long, default_value_t = 60)]
    pub request_timeout_secs: u64,
    #[arg(long, default_value_t = 10)]
    pub log_timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8001".to_string(),
            generate_path: "/generate-image".to_string(),
            refine_path: "/refine".to_string(),
            library_url: "interior_style_library.json".to_string(),
            log_url: None,
            request_timeout_secs: 60,
            log_timeout_secs: 10,
        }
    }
}

impl EndpointConfig {
    pub fn generate_url(&self) -> String {
        join_url(&self.backend_url, &self.generate_path)
    }

    pub fn refine_url(&self) -> String {
        join_url(&self.backend_url, &self.refine_path)
    }

    pub fn library_url(&self) -> String {
        if self.library_url.starts_with("http://") || self.library_url.starts_with("https://") {
            self.library_url.clone()
        } else {
            join_url(&self.backend_url, &self.library_url)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn log_timeout(&self) -> Duration {
        Duration::from_secs(self.log_timeout_secs)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    #[arg(long, default_value_t = 700.0)]
    pub canvas_width: f64,
    #[arg(long, default_value_t = 500.0)]
    pub canvas_height: f64,
    #[arg(long, default_value_t = 40.0)]
    pub stem_length: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: 700.0,
            canvas_height: 500.0,
            stem_length: 40.0,
        }
    }
}

impl CanvasConfig {
    pub fn canvas(&self) -> Canvas {
        Canvas::builder()
            .width(self.canvas_width)
            .height(self.canvas_height)
            .stem_length(self.stem_length)
            .build()
    }
}

/// How a style is settled once the score is known.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StyleChoiceMode {
    /// Offer both styles of the band and let the participant pick.
    #[default]
    Pair,
    /// Legacy flow: flip a coin between the band's two styles.
    CoinFlip,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    #[arg(long, default_value = "living room")]
    pub scene: String,
    #[arg(long, value_enum, default_value_t = StyleChoiceMode::Pair)]
    pub style_choice: StyleChoiceMode,
    /// Highest value on each evaluation axis (the lowest is 1).
    #[arg(long, default_value_t = 7)]
    pub evaluation_scale: u8,
    #[arg(long, default_value_t = DELTA_DISPLAY_THRESHOLD)]
    pub delta_threshold: f64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            scene: "living room".to_string(),
            style_choice: StyleChoiceMode::Pair,
            evaluation_scale: 7,
            delta_threshold: DELTA_DISPLAY_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PadResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            PadError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PadResult<()> {
        if self.study.evaluation_scale < 2 {
            return Err(PadError::Config(
                "evaluation_scale must be at least 2".to_string(),
            ));
        }
        let side_ok = |v: f64| v > 0.0 && v <= MAX_CANVAS_SIDE;
        if !(side_ok(self.canvas.canvas_width) && side_ok(self.canvas.canvas_height)) {
            return Err(PadError::Config(format!(
                "canvas dimensions must lie in (0, {}]",
                MAX_CANVAS_SIDE
            )));
        }
        if !(0.0..=1.0).contains(&self.study.delta_threshold) {
            return Err(PadError::Config(
                "delta_threshold must lie in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies over every value the user typed on the command line, leaving
    /// file-provided values in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(endpoints.backend_url);
        update_if_present!(endpoints.generate_path);
        update_if_present!(endpoints.refine_path);
        update_if_present!(endpoints.library_url);
        update_if_present!(endpoints.log_url);
        update_if_present!(endpoints.request_timeout_secs);
        update_if_present!(endpoints.log_timeout_secs);

        update_if_present!(canvas.canvas_width);
        update_if_present!(canvas.canvas_height);
        update_if_present!(canvas.stem_length);

        update_if_present!(study.scene);
        update_if_present!(study.style_choice);
        update_if_present!(study.evaluation_scale);
        update_if_present!(study.delta_threshold);
    }
}
