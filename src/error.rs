//! Error types for the couchlite client SDK.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Unexpected HTTP status: {status}")]
  HttpStatus { status: u16 },

  #[error("Parse error: {0}")]
  Parse(String),
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self {
    Self::Parse(e.to_string())
  }
}

pub type Result<T> = std::result::Result<T, Error>;
