use thiserror::Error;

#[derive(Debug, Error)]
pub enum UberApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not reach the Uber API: {0}")]
    Transport(String),
    #[error("Could not decode the Uber API response: {0}")]
    Decode(String),
    #[error("Uber API request failed. Error {status}. {body}")]
    Remote { status: u16, body: String },
}
