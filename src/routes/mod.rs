use serde::Serialize;

pub mod images;
pub mod products;

/// Generic JSON error body. Internal failure detail stays in the logs.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
