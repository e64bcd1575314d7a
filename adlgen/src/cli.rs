use std::path::PathBuf;

use clap::Parser;

/// Command line interface for adlgen
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Generate ADL C headers from the SDK's Doxygen documentation"
)]
pub struct Cli {
  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a TOML configuration file. Defaults to `adlgen.toml` in the
  /// working directory when present.
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,

  /// Root of the unpacked SDK (contains `include/` and `Public-Documents/`).
  #[arg(short, long)]
  pub sdk_dir: Option<PathBuf>,

  /// Directory the headers are written to.
  #[arg(short, long)]
  pub output_dir: Option<PathBuf>,

  /// Keep whatever is already in the output directory instead of clearing
  /// it first. Headers left over from an earlier run are not removed, so
  /// the result may not match a clean run.
  #[arg(long = "no-clean", action = clap::ArgAction::SetTrue)]
  pub no_clean: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
