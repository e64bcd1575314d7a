use std::{
  fs,
  path::{Path, PathBuf},
};

use adlgen::cli::Cli;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const BIN_NAME: &str = "adlgen";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the files shipped alongside the adlgen binary
  Dist {
    /// Where to put the generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Skip the manpage.
    #[arg(long, conflicts_with = "no_completions")]
    no_manpage: bool,

    /// Skip shell completions.
    #[arg(long, conflicts_with = "no_manpage")]
    no_completions: bool,
  },
}

fn main() -> Result<()> {
  let Commands::Dist {
    output_dir,
    no_manpage,
    no_completions,
  } = Xtask::parse().command;

  if !no_completions {
    write_completions(&output_dir)?;
  }
  if !no_manpage {
    write_manpage(&output_dir)?;
  }
  Ok(())
}

fn write_completions(output_dir: &Path) -> Result<()> {
  let dir = output_dir.join("completions");
  fs::create_dir_all(&dir)
    .with_context(|| format!("Failed to create {}", dir.display()))?;

  let mut cmd = Cli::command();
  for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
    let path = generate_to(shell, &mut cmd, BIN_NAME, &dir)
      .with_context(|| format!("Failed to write {shell} completions"))?;
    println!("Wrote {}", path.display());
  }
  Ok(())
}

fn write_manpage(output_dir: &Path) -> Result<()> {
  let dir = output_dir.join("man");
  fs::create_dir_all(&dir)
    .with_context(|| format!("Failed to create {}", dir.display()))?;

  let path = dir.join(format!("{BIN_NAME}.1"));
  let mut file = fs::File::create(&path)
    .with_context(|| format!("Failed to create {}", path.display()))?;
  Man::new(Cli::command().name(BIN_NAME))
    .render(&mut file)
    .context("Failed to render manpage")?;
  println!("Wrote {}", path.display());
  Ok(())
}
