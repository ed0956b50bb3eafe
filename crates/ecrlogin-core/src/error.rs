use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("failed to initialize AWS session: {0}")]
    SessionInit(String),

    #[error("ECR API call failed: {0}")]
    Api(String),

    #[error("{0}")]
    ResponseShape(String),

    #[error("endpoint is of the wrong format: {0:?}")]
    EndpointFormat(String),

    #[error("{0}")]
    Encoding(String),

    #[error("decoded login:password pair is of the wrong format")]
    TokenFormat,

    #[error("{program} login failed: {message}")]
    ExternalCommand { program: String, message: String },
}

pub type Result<T> = std::result::Result<T, LoginError>;
