use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumeraError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
