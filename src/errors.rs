use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Csv Error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Json Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown action")]
    UnknownAction,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Guest ID is required")]
    MissingGuestId,

    #[error("Invalid guest ID")]
    InvalidGuest,

    #[error("Topic not found")]
    TopicNotFound,
}

// Every failure leaves the dispatcher as `{success:false, error:<message>}`.
// Storage faults are logged and masked; domain failures carry their message.
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::CsvError(error) => {
                error!("Csv Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::JsonError(error) => {
                error!("Json Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::UnknownAction => (StatusCode::BAD_REQUEST, "Unknown action".to_string()),
            Error::MissingFields => {
                (StatusCode::BAD_REQUEST, "Missing required fields".to_string())
            }
            Error::MissingGuestId => {
                (StatusCode::BAD_REQUEST, "Guest ID is required".to_string())
            }
            Error::InvalidGuest => (StatusCode::NOT_FOUND, "Invalid guest ID".to_string()),
            Error::TopicNotFound => (StatusCode::NOT_FOUND, "Topic not found".to_string()),
        };
        (
            status,
            Json(json!({ "success": false, "error": message })),
        )
            .into_response()
    }
}
