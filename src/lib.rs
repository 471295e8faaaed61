pub mod config;
pub mod error;
pub mod inference;
pub mod server;
pub mod urgency;

pub use error::{Error, Result};
