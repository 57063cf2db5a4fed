use serde::Serialize;

/// Error body shape shared by every failing response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
