//! The generation pipeline: file index, function locator, extractor and
//! renderer, in that order, over every documented file.
use std::path::PathBuf;

use adlgen_doxygen::{
  File,
  PageCache,
  extract_function,
  list_files,
  list_functions,
  read_prebuilt,
};
use adlgen_header::{UNKNOWN_STRUCTS, render_header, render_umbrella};
use log::info;

use crate::{
  config::Config,
  error::GenerateError,
  output::{self, RenderedHeader},
};

/// Name of the Doxygen page listing every documented file.
pub const FILE_LISTING: &str = "files.html";

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  /// Generated headers, not counting `functions.h`.
  pub files:        usize,
  pub functions:    usize,
  /// Distinct HTML pages parsed.
  pub pages_parsed: usize,
}

/// One header generation run over an unpacked SDK.
#[derive(Debug)]
pub struct Generator {
  doc_root:    PathBuf,
  include_dir: PathBuf,
  output_dir:  PathBuf,
  clean:       bool,
}

impl Generator {
  /// Resolve the input and output locations from `config`.
  ///
  /// # Errors
  ///
  /// Returns [`GenerateError::Config`] if no SDK directory is configured.
  pub fn new(config: &Config) -> Result<Self, GenerateError> {
    Ok(Self {
      doc_root:    config.doc_root()?,
      include_dir: config.include_dir()?,
      output_dir:  config.output_dir.clone(),
      clean:       config.clean,
    })
  }

  /// Generate all headers.
  ///
  /// Every header is rendered in memory before anything is written, so a
  /// documentation page that breaks the layout assumptions aborts the run
  /// with an empty (cleared) output directory rather than a partial one.
  ///
  /// # Errors
  ///
  /// Returns an error if the SDK tree is incomplete, a page cannot be read or
  /// does not have the expected layout, or the output cannot be written.
  pub fn run(&self) -> Result<Summary, GenerateError> {
    self.check_inputs()?;

    info!("Generating headers from documentation");
    info!("    Doc dir: {}", self.doc_root.display());
    info!("    Out dir: {}", self.output_dir.display());

    output::prepare_output_dir(&self.output_dir, self.clean)?;

    let mut cache = PageCache::new(&self.doc_root);
    let prebuilt = read_prebuilt(&self.include_dir)?;
    let listing = cache.page(FILE_LISTING)?;
    let files = list_files(&listing, &prebuilt)?;

    let mut headers = Vec::with_capacity(files.len());
    let mut function_count = 0;
    for file in &files {
      let (header, count) = Self::render_file(&mut cache, file)?;
      function_count += count;
      headers.push(header);
    }
    let umbrella = render_umbrella(
      &files.iter().map(|file| file.out_file.as_str()).collect::<Vec<_>>(),
    );

    output::copy_prebuilt(&self.include_dir, &self.output_dir)?;
    output::write_headers(&self.output_dir, &headers, &umbrella)?;

    let summary = Summary {
      files:        headers.len(),
      functions:    function_count,
      pages_parsed: cache.len(),
    };
    info!(
      "Generated {} headers with {} functions from {} pages",
      summary.files, summary.functions, summary.pages_parsed
    );
    Ok(summary)
  }

  fn check_inputs(&self) -> Result<(), GenerateError> {
    if !self.include_dir.is_dir() {
      return Err(GenerateError::MissingInput(self.include_dir.clone()));
    }
    let listing = self.doc_root.join(FILE_LISTING);
    if !listing.is_file() {
      return Err(GenerateError::MissingInput(listing));
    }
    Ok(())
  }

  fn render_file(
    cache: &mut PageCache,
    file: &File,
  ) -> Result<(RenderedHeader, usize), GenerateError> {
    info!("Generating functions for output file {}", file.out_file);
    let function_docs = list_functions(cache, file)?;
    info!("    Found {} functions", function_docs.len());

    let functions = function_docs
      .iter()
      .map(|function_doc| extract_function(cache, function_doc))
      .collect::<Result<Vec<_>, _>>()?;

    let header = RenderedHeader {
      out_file: file.out_file.clone(),
      contents: render_header(&file.out_file, &functions, UNKNOWN_STRUCTS),
    };
    Ok((header, functions.len()))
  }
}
