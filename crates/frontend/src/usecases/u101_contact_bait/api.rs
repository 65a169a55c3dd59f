use contracts::bot_analytics::ContactSubmission;

use crate::shared::api_utils::{endpoints, post_form, ApiConfig, FetchError};

/// Form body exactly as a browser would post it.
pub fn encode_submission(form: &ContactSubmission) -> Result<String, FetchError> {
    serde_qs::to_string(form).map_err(|e| FetchError::Encode(e.to_string()))
}

pub async fn submit_contact(api: &ApiConfig, form: &ContactSubmission) -> Result<(), FetchError> {
    let body = encode_submission(form)?;
    post_form(&api.endpoint(endpoints::CONTACT_BOT), body).await
}
