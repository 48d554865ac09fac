use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of the `get-by-id` endpoints.
///
/// A missing `id` decodes to an empty string, which then fails identifier validation.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GetByIdDto {
    #[serde(default)]
    pub id: String,
}
