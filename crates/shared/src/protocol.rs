use crate::{domain::UserRecord, error::FetchError};

/// Decodes a directory response body: a JSON array of user objects.
pub fn decode_user_list(body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_slice::<Vec<UserRecord>>(body).map_err(|e| FetchError::parse(e.to_string()))
}
