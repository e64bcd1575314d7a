use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading the Doxygen documentation tree.
#[derive(Debug, Error)]
pub enum DoxygenError {
  /// A documentation page could not be read from disk.
  #[error("failed to read documentation page `{path}`: {source}")]
  ReadPage {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A page does not have the structure the extractor relies on.
  ///
  /// Generated headers feed a C compiler, so a missing table, anchor or
  /// section is never papered over. The page and the failed expectation are
  /// carried so the layout assumption can be patched by hand.
  #[error("unexpected documentation layout in `{page}`: {detail}")]
  FormatMismatch { page: PathBuf, detail: String },
}

impl DoxygenError {
  pub(crate) fn mismatch(
    page: impl Into<PathBuf>,
    detail: impl Into<String>,
  ) -> Self {
    Self::FormatMismatch {
      page:   page.into(),
      detail: detail.into(),
    }
  }
}
