use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use fare_link_engine::{
    traits::ProviderError,
    CorrelationError,
    LinkingError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NoRecordFound(String),
    #[error("No eligible trip found in the ride history")]
    NoEligibleTrip,
    #[error("Session {0} has not completed the ride-provider handshake")]
    SessionNotLinked(String),
    #[error("Upstream provider failure. {0}")]
    ProviderFailure(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::NoEligibleTrip => StatusCode::NOT_FOUND,
            Self::SessionNotLinked(_) => StatusCode::CONFLICT,
            Self::ProviderFailure(_) => StatusCode::BAD_GATEWAY,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<LinkingError> for ServerError {
    fn from(e: LinkingError) -> Self {
        match e {
            LinkingError::ValidationError(msg) => Self::ValidationError(msg),
            LinkingError::SessionNotFound(_) => Self::NoRecordFound(e.to_string()),
            LinkingError::Provider(p) => Self::ProviderFailure(p.to_string()),
            LinkingError::StoreError(s) => Self::Unspecified(s.to_string()),
        }
    }
}

impl From<CorrelationError> for ServerError {
    fn from(e: CorrelationError) -> Self {
        match e {
            CorrelationError::SessionNotFound(_) => Self::NoRecordFound(e.to_string()),
            CorrelationError::SessionNotLinked(id) => Self::SessionNotLinked(id),
            CorrelationError::NoTripFound => Self::NoEligibleTrip,
            CorrelationError::MalformedCoordinates(m) => Self::Unspecified(m.to_string()),
            CorrelationError::Provider(p) => Self::ProviderFailure(p.to_string()),
            CorrelationError::StoreError(s) => Self::Unspecified(s.to_string()),
        }
    }
}

impl From<ProviderError> for ServerError {
    fn from(e: ProviderError) -> Self {
        Self::ProviderFailure(e.to_string())
    }
}
