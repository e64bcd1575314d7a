//! Filesystem side of a run: clearing the output directory, copying the
//! pre-built headers and writing the generated ones.
use std::{fs, path::Path};

use log::{debug, info};

use crate::error::GenerateError;

/// Subdirectory of the output directory holding generated headers.
pub const FUNCTIONS_DIR: &str = "functions";

/// File name of the umbrella header.
pub const UMBRELLA_FILE: &str = "functions.h";

/// A rendered header waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader {
  pub out_file: String,
  pub contents: String,
}

/// Make sure `output_dir` exists, removing whatever it held first when
/// `clean` is set.
///
/// # Errors
///
/// Returns an error if the directory cannot be removed or created.
pub fn prepare_output_dir(
  output_dir: &Path,
  clean: bool,
) -> Result<(), GenerateError> {
  if clean && output_dir.exists() {
    info!("Clearing {}", output_dir.display());
    fs::remove_dir_all(output_dir)?;
  }
  fs::create_dir_all(output_dir)?;
  Ok(())
}

/// Copy the SDK's own headers into `output_dir`, untouched.
///
/// # Errors
///
/// Returns an error if the copy fails.
pub fn copy_prebuilt(
  include_dir: &Path,
  output_dir: &Path,
) -> Result<(), GenerateError> {
  info!("Copying pre-built headers from {}", include_dir.display());
  let options = fs_extra::dir::CopyOptions::new()
    .overwrite(true)
    .content_only(true);
  fs_extra::dir::copy(include_dir, output_dir, &options)?;
  Ok(())
}

/// Write every generated header under `functions/` and the umbrella header
/// next to it.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn write_headers(
  output_dir: &Path,
  headers: &[RenderedHeader],
  umbrella: &str,
) -> Result<(), GenerateError> {
  let functions_dir = output_dir.join(FUNCTIONS_DIR);
  fs::create_dir_all(&functions_dir)?;

  for header in headers {
    let path = functions_dir.join(&header.out_file);
    debug!("Writing {}", path.display());
    fs::write(&path, &header.contents)?;
  }

  fs::write(output_dir.join(UMBRELLA_FILE), umbrella)?;
  Ok(())
}
