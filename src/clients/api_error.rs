use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cannot find entity {0}")]
    EntityNotFound(String),
    #[error("api error {code}: {info}")]
    RemoteError { code: String, info: String },
    #[error("error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("error: {0}")]
    InvalidJsonError(#[from] serde_json::Error),
    #[error("error: {0}")]
    GenericError(String),
}
