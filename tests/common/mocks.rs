use async_trait::async_trait;
use code_review_relay::{reviewer::ReviewService, Error, Result};
use std::sync::{Arc, Mutex};

/// Mock review service for testing. Records every code snippet it is invoked
/// with so tests can assert the relay was (or was not) called.
#[derive(Debug)]
pub struct MockReviewService {
    pub response: Option<String>,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockReviewService {
    pub fn new() -> Self {
        Self {
            response: None,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ReviewService for MockReviewService {
    async fn review(&self, code: &str) -> Result<String> {
        self.calls.lock().unwrap().push(code.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        match self.response {
            Some(ref response) => Ok(response.clone()),
            None => Err(Error::llm("No mock response configured")),
        }
    }
}

impl Default for MockReviewService {
    fn default() -> Self {
        Self::new()
    }
}
