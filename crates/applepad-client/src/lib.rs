//! Async plumbing between a study session and its remote collaborators:
//! the image backend, the style library host and the trial log.

pub mod backend;
pub mod error;
pub mod logger;

pub use backend::BackendClient;
pub use error::{ClientError, ClientResult};
pub use logger::TrialLogger;
