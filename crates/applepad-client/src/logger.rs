use applepad_core::trial::TrialRecord;
use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Fire-and-forget sender for trial records.
///
/// Failures are logged and dropped; nothing is retried and nothing reaches
/// the participant.
#[derive(Clone)]
pub struct TrialLogger {
    http: Client,
    url: Option<String>,
}

impl TrialLogger {
    pub fn new(url: Option<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client for trial log: {}", e);
                Client::new()
            });
        Self { http, url }
    }

    pub fn disabled() -> Self {
        Self {
            http: Client::new(),
            url: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Posts `record` in the background. Must be called inside a tokio runtime.
    ///
    /// Returns the task handle so callers that care (tests, shutdown) can
    /// wait for it; everyone else just drops it.
    pub fn submit(&self, record: TrialRecord) -> Option<JoinHandle<()>> {
        let Some(url) = self.url.clone() else {
            debug!("Trial logging disabled, dropping record {}", record.session_id);
            return None;
        };
        let http = self.http.clone();

        Some(tokio::spawn(async move {
            match http.post(&url).json(&record).send().await {
                Ok(resp) if resp.status().is_success() => {
                    info!("Trial record {} logged", record.session_id);
                }
                Ok(resp) => {
                    warn!("Logging endpoint answered {}", resp.status());
                }
                Err(e) => {
                    warn!("Logging error: {}", e);
                }
            }
        }))
    }
}
