use serde::{Deserialize, Serialize};

/// Body posted by the decoy contact form.
///
/// `middle_name` and `company` are hidden from humans; anything filling them
/// in is almost certainly automated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub middle_name: String,
    pub company: String,
}
