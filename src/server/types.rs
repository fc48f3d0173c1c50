use serde::Deserialize;

/// Body of `POST /ai/get-review`. `code` stays optional at the serde level so
/// a missing or null field reaches the handler instead of an extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub code: Option<String>,
}
