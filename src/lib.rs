pub mod config;
pub mod error;
pub mod reviewer;
pub mod server;

pub use error::{Error, Result};
