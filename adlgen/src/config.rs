use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{cli::Cli, error::GenerateError};

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "adlgen.toml";

fn default_output_dir() -> PathBuf {
  PathBuf::from("adl_headers")
}

fn default_doc_subdir() -> PathBuf {
  PathBuf::from("Public-Documents").join("html")
}

fn default_include_subdir() -> PathBuf {
  PathBuf::from("include")
}

const fn default_true() -> bool {
  true
}

/// Configuration options for adlgen
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Root of the unpacked SDK
  #[serde(default)]
  pub sdk_dir: Option<PathBuf>,

  /// Directory receiving the pre-built and generated headers
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,

  /// Whether to clear the output directory before generating
  #[serde(default = "default_true")]
  pub clean: bool,

  /// Location of the Doxygen HTML inside the SDK
  #[serde(default = "default_doc_subdir")]
  pub doc_subdir: PathBuf,

  /// Location of the pre-built headers inside the SDK
  #[serde(default = "default_include_subdir")]
  pub include_subdir: PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      sdk_dir:        None,
      output_dir:     default_output_dir(),
      clean:          default_true(),
      doc_subdir:     default_doc_subdir(),
      include_subdir: default_include_subdir(),
    }
  }
}

impl Config {
  /// Read a TOML configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or is not valid TOML for
  /// this configuration.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerateError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      GenerateError::Config(format!(
        "Failed to read config file {}: {e}",
        path.display()
      ))
    })?;
    Ok(toml::from_str(&content)?)
  }

  /// Load configuration from an explicit or discovered file, then apply the
  /// command line on top.
  ///
  /// # Errors
  ///
  /// Returns an error if a configuration file cannot be loaded, or if no SDK
  /// directory is configured anywhere.
  pub fn load(cli: &Cli) -> Result<Self, GenerateError> {
    let mut config = if let Some(path) = &cli.config_file {
      Self::from_file(path)?
    } else if let Some(discovered) = Self::find_config_file() {
      log::info!("Using discovered config file: {}", discovered.display());
      Self::from_file(&discovered)?
    } else {
      Self::default()
    };

    config.merge_with_cli(cli);
    config.sdk_dir()?;
    Ok(config)
  }

  fn find_config_file() -> Option<PathBuf> {
    let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
  }

  /// Command line flags win over file values.
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(sdk_dir) = &cli.sdk_dir {
      self.sdk_dir = Some(sdk_dir.clone());
    }
    if let Some(output_dir) = &cli.output_dir {
      self.output_dir.clone_from(output_dir);
    }
    if cli.no_clean {
      self.clean = false;
    }
  }

  /// The configured SDK root.
  ///
  /// # Errors
  ///
  /// Returns [`GenerateError::Config`] if none was given.
  pub fn sdk_dir(&self) -> Result<&Path, GenerateError> {
    self.sdk_dir.as_deref().ok_or_else(|| {
      GenerateError::Config(
        "no SDK directory given; pass --sdk-dir or set `sdk_dir`".to_string(),
      )
    })
  }

  /// Directory holding `files.html` and the per-file pages.
  ///
  /// # Errors
  ///
  /// Returns [`GenerateError::Config`] if no SDK directory is configured.
  pub fn doc_root(&self) -> Result<PathBuf, GenerateError> {
    Ok(self.sdk_dir()?.join(&self.doc_subdir))
  }

  /// Directory holding the pre-built headers.
  ///
  /// # Errors
  ///
  /// Returns [`GenerateError::Config`] if no SDK directory is configured.
  pub fn include_dir(&self) -> Result<PathBuf, GenerateError> {
    Ok(self.sdk_dir()?.join(&self.include_subdir))
  }
}
