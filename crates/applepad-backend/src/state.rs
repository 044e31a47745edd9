use crate::settings::Settings;
use crate::upstream::{ImageSource, Upstream};
use applepad_core::style::{LibraryState, StyleLibrary};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

pub struct AppState {
    pub http: Client,
    pub images: ImageSource,
    pub library: LibraryState,
    pub library_path: PathBuf,
    pub data_dir: PathBuf,
    pub scene: String,
    pub delta_threshold: f64,
}

impl AppState {
    pub fn new(settings: &Settings) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.upstream_timeout_secs))
            .build()?;

        let upstream = settings
            .hf_endpoint_url
            .as_ref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| Upstream {
                url: url.clone(),
                token: settings.hf_token.clone(),
            });

        Ok(Self {
            http,
            images: ImageSource::new(upstream, &settings.placeholder),
            library: LibraryState::from_result(StyleLibrary::load_from_file(&settings.library)),
            library_path: settings.library.clone(),
            data_dir: settings.data.clone(),
            scene: settings.scene.clone(),
            delta_threshold: settings.delta_threshold,
        })
    }
}
