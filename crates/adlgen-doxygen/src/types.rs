/// One documented source file that has no pre-built header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
  /// Documentation page for the file, relative to the HTML root.
  pub doc_file: String,
  /// Name of the header generated for this file (e.g. `overdrive5.h`).
  pub out_file: String,
}

/// Where the full documentation of one function lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDoc {
  /// Page holding the detailed documentation, relative to the HTML root.
  pub doc_file: String,
  /// In-page anchor of the documentation block.
  pub anchor:   String,
  /// Header the function is written to.
  pub out_file: String,
}

/// A single prototype parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
  pub type_name: String,
  pub name:      String,
}

/// A function prototype. Parameters are kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proto {
  pub return_type: String,
  pub name:        String,
  pub params:      Vec<Param>,
}

/// Documentation for one parameter.
///
/// `direction` is copied from the page as-is (`[in]`, `[out]`, `[in,out]`,
/// or whatever else the vendor wrote).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
  pub direction:   String,
  pub name:        String,
  pub description: String,
}

/// Structured documentation of a function. Every section is optional; an
/// absent section is left out of the rendered comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
  pub description:         Option<String>,
  pub supported_platforms: Option<String>,
  pub params:              Option<Vec<DocParam>>,
  pub returns:             Option<String>,
  pub remark:              Option<String>,
  pub deprecated:          Option<String>,
}

/// A function as written to a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
  pub proto: Proto,
  pub doc:   Doc,
}
