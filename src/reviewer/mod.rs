mod client;

pub use client::{OpenAiReviewer, ReviewService, DEFAULT_SYSTEM_PROMPT};
