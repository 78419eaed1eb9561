use derive_more::Display;
use types::errors::ApiError;

#[derive(Debug, Display)]
pub enum CliError {
    #[display("{}", _0)]
    Api(ApiError),

    #[display("{}", _0)]
    Input(String),

    #[display("Io error: {}", _0)]
    Io(std::io::Error),

    #[display("Could not determine the configuration directory")]
    MissingConfigDir,

    #[display("Transaction was not sent")]
    SendFailed,
}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        Self::Api(error)
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
