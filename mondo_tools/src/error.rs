use thiserror::Error;

#[derive(Debug, Error)]
pub enum MondoApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not reach the Mondo API: {0}")]
    Transport(String),
    #[error("Could not decode the Mondo API response: {0}")]
    Decode(String),
    #[error("Mondo API request failed. Error {status}. {body}")]
    Remote { status: u16, body: String },
}
