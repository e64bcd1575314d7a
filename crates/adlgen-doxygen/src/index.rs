//! The documented-file listing (`files.html`).
use std::{
  collections::{BTreeSet, HashSet},
  fs,
  path::Path,
};

use log::{debug, warn};

use crate::{
  error::DoxygenError,
  markup::{self, Document},
  types::File,
};

/// Collect the names of the headers the SDK already ships under `include/`.
///
/// # Errors
///
/// Returns [`DoxygenError::ReadPage`] if the directory cannot be listed.
pub fn read_prebuilt(
  include_dir: &Path,
) -> Result<BTreeSet<String>, DoxygenError> {
  let read_error = |source: std::io::Error| {
    DoxygenError::ReadPage {
      path: include_dir.to_path_buf(),
      source,
    }
  };

  let mut names = BTreeSet::new();
  for entry in fs::read_dir(include_dir).map_err(read_error)? {
    let entry = entry.map_err(read_error)?;
    names.insert(entry.file_name().to_string_lossy().into_owned());
  }
  Ok(names)
}

/// Every file in the listing's directory table that is not already covered by
/// a pre-built header, in listing order.
///
/// # Errors
///
/// Returns [`DoxygenError::FormatMismatch`] if the page has no
/// `table.directory`, or if a listed link has no `href`.
pub fn list_files(
  listing: &Document,
  prebuilt: &BTreeSet<String>,
) -> Result<Vec<File>, DoxygenError> {
  let directory =
    listing.require(listing.root(), "table.directory", "the file listing")?;

  let mut seen = HashSet::new();
  let mut files = Vec::new();
  for link in markup::find_all(&directory, "a.el") {
    let out_file = markup::text(&link);
    if prebuilt.contains(&out_file) {
      debug!("Skipping {out_file}, a pre-built header exists");
      continue;
    }

    let doc_file = markup::attr(&link, "href").ok_or_else(|| {
      listing.mismatch(format!("listing entry `{out_file}` has no href"))
    })?;

    if !seen.insert(out_file.clone()) {
      warn!("Listing names {out_file} more than once, keeping the first");
      continue;
    }

    files.push(File { doc_file, out_file });
  }

  Ok(files)
}
