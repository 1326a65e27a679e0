use serde::Serialize;

/// JSON message body used across the API: `{"message": "..."}`. Carries
/// both error messages and simple success acknowledgements.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
