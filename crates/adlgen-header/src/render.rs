//! Text rendering of prototypes and their documentation.
use adlgen_doxygen::{Doc, Function, Proto};

/// Leader put in front of every documentation line.
pub const COMMENT_LEADER: &str = "/// ";

/// Render a prototype as an aligned C declaration.
///
/// ```text
/// int ADL2_Overdrive5_FanSpeed_Get ( ADL_CONTEXT_HANDLE context,
///                                    int                iAdapterIndex
///                                  );
/// ```
///
/// Parameter types are padded to the widest type of the function so the names
/// line up; the closing parenthesis sits two columns left of the parameters.
#[must_use]
pub fn render_prototype(proto: &Proto) -> String {
  if proto.params.is_empty() {
    return format!("{} {} ();", proto.return_type, proto.name);
  }

  let opening = format!("{} {} ( ", proto.return_type, proto.name);
  let indent = opening.chars().count();
  let type_width = proto
    .params
    .iter()
    .map(|param| param.type_name.chars().count())
    .max()
    .unwrap_or_default();

  let mut out = opening;
  let last = proto.params.len() - 1;
  for (i, param) in proto.params.iter().enumerate() {
    if i > 0 {
      out.push_str(&" ".repeat(indent));
    }
    out.push_str(&format!("{:<type_width$} {}", param.type_name, param.name));
    if i < last {
      out.push(',');
    }
    out.push('\n');
  }
  out.push_str(&" ".repeat(indent - 2));
  out.push_str(");");
  out
}

/// Render the documentation comment for a function.
///
/// Sections appear in a fixed order and are skipped when absent. A [`Doc`]
/// without any section still renders the bare leader line.
#[must_use]
pub fn render_doc(doc: &Doc) -> String {
  let mut out = String::new();

  if let Some(description) = present(doc.description.as_ref()) {
    out.push_str(&description.replace('\n', "\n\n"));
    out.push('\n');
  }

  if let Some(platforms) = present(doc.supported_platforms.as_ref()) {
    out.push_str(&format!("Supported Platforms:\n  {platforms}\n\n"));
  }

  if let Some(params) = doc.params.as_ref().filter(|params| !params.is_empty())
  {
    let dir_width = params
      .iter()
      .map(|param| param.direction.chars().count())
      .max()
      .unwrap_or_default();
    let name_width = params
      .iter()
      .map(|param| param.name.chars().count())
      .max()
      .unwrap_or_default();

    out.push_str("Parameters\n");
    for param in params {
      out.push_str(&format!(
        "  {:<dir_width$} {:<name_width$} {}\n",
        param.direction, param.name, param.description
      ));
    }
    out.push('\n');
  }

  if let Some(returns) = present(doc.returns.as_ref()) {
    out.push_str(&format!("Returns\n  {returns}\n\n"));
  }

  if let Some(remark) = present(doc.remark.as_ref()) {
    out.push_str(&format!("Remarks\n  {remark}\n"));
  }

  if let Some(deprecated) = present(doc.deprecated.as_ref()) {
    out.push_str(&format!("Deprecated:\n  {deprecated}\n"));
  }

  out
    .trim()
    .split('\n')
    .map(|line| format!("{COMMENT_LEADER}{line}"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Documentation comment followed by the declaration.
#[must_use]
pub fn render_function(function: &Function) -> String {
  format!(
    "{}\n{}",
    render_doc(&function.doc),
    render_prototype(&function.proto)
  )
}

fn present(field: Option<&String>) -> Option<&str> {
  field.map(String::as_str).filter(|text| !text.is_empty())
}
