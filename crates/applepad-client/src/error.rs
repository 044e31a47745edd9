use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend reported an error: {0}")]
    Backend(String),

    #[error("Image payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub type ClientResult<T> = Result<T, ClientError>;
