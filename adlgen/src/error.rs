use std::{io, path::PathBuf};

use adlgen_doxygen::DoxygenError;
use thiserror::Error;

/// Top-level error type for the adlgen crate.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Missing SDK input: {}", .0.display())]
  MissingInput(PathBuf),

  #[error(transparent)]
  Doxygen(#[from] DoxygenError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),
}

impl From<fs_extra::error::Error> for GenerateError {
  fn from(e: fs_extra::error::Error) -> Self {
    Self::Io(io::Error::other(e.to_string()))
  }
}
