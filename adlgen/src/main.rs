use adlgen::{cli::Cli, config::Config, generate::Generator};
use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let config = Config::load(&cli).wrap_err("Failed to load configuration")?;
  let generator = Generator::new(&config)?;
  generator.run().wrap_err_with(|| {
    format!(
      "Failed to generate headers into {}",
      config.output_dir.display()
    )
  })?;

  info!(
    "Headers generated successfully in {}",
    config.output_dir.display()
  );
  Ok(())
}
