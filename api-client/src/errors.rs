use service_area::MapError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<ClientError> for MapError {
    fn from(err: ClientError) -> Self {
        MapError::DataFetch(err.to_string())
    }
}
