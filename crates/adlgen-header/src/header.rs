//! Assembly of complete header files.
use std::fmt::Write;

use adlgen_doxygen::Function;

use crate::{render::render_function, structs::UnknownStruct};

/// Guard symbol of the umbrella header.
pub const UMBRELLA_GUARD: &str = "ADL_HEADER_H_";

/// The SDK headers every generated file builds on, relative to the header
/// directory.
pub const CORE_HEADERS: [&str; 3] =
  ["adl_defines.h", "adl_sdk.h", "adl_structures.h"];

/// Include guard for a generated header.
///
/// Built from the file name up to its first `.`, uppercased, with every run of
/// characters that cannot appear in a C identifier collapsed to `_`:
/// `overdrive5.h` becomes `ADL_HEADER_OVERDRIVE5_H_`.
#[must_use]
pub fn include_guard(out_file: &str) -> String {
  let stem = out_file.split('.').next().unwrap_or(out_file);

  let mut symbol = String::from("ADL_HEADER_");
  let mut in_run = false;
  for c in stem.chars() {
    if c.is_ascii_alphanumeric() {
      symbol.push(c.to_ascii_uppercase());
      in_run = false;
    } else if !in_run {
      symbol.push('_');
      in_run = true;
    }
  }
  symbol.push_str("_H_");
  symbol
}

/// Render the header generated for one documented file.
///
/// Functions are written in the order given, each followed by two blank
/// lines.
#[must_use]
pub fn render_header(
  out_file: &str,
  functions: &[Function],
  unknown_structs: &[UnknownStruct],
) -> String {
  let guard = include_guard(out_file);
  let mut out = String::new();

  // Writing to a String cannot fail.
  let _ = writeln!(out, "#ifndef {guard}");
  let _ = writeln!(out, "#define {guard}");
  out.push('\n');
  out.push_str("#include <errno.h>\n");
  for core in CORE_HEADERS {
    let _ = writeln!(out, "#include \"../{core}\"");
  }
  out.push('\n');

  out.push_str(
    "// Types used by the API without a known definition, kept opaque\n",
  );
  for unknown in unknown_structs {
    let _ = writeln!(out, "{}", unknown.define());
  }
  out.push('\n');

  for function in functions {
    out.push_str(&render_function(function));
    out.push_str("\n\n\n");
  }

  let _ = writeln!(out, "#endif /* {guard} */");
  out
}

/// Render `functions.h`, which includes the core SDK headers and every
/// generated header in the order given.
#[must_use]
pub fn render_umbrella<S: AsRef<str>>(out_files: &[S]) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "#ifndef {UMBRELLA_GUARD}");
  let _ = writeln!(out, "#define {UMBRELLA_GUARD}");
  out.push('\n');
  for core in CORE_HEADERS {
    let _ = writeln!(out, "#include \"{core}\"");
  }
  out.push('\n');
  for out_file in out_files {
    let _ = writeln!(out, "#include \"functions/{}\"", out_file.as_ref());
  }
  out.push('\n');
  let _ = writeln!(out, "#endif /* {UMBRELLA_GUARD} */");
  out
}
