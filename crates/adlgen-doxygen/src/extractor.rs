//! Turns one detailed-documentation block into a [`Function`].
//!
//! The block sits right after the `<a id="...">` anchor the locator found:
//!
//! ```html
//! <a id="ga01"></a>
//! <h2 class="memtitle">...</h2>
//! <div class="memitem">
//!   <div class="memproto"> table of return type, name and parameters </div>
//!   <div class="memdoc"> paragraphs and tagged definition lists </div>
//! </div>
//! ```
use kuchikikiki::NodeRef;

use crate::{
  error::DoxygenError,
  markup::{self, Document, PageCache},
  types::{Doc, DocParam, Function, FunctionDoc, Param, Proto},
};

/// Build the [`Function`] documented at `function_doc`.
///
/// # Errors
///
/// Returns [`DoxygenError::ReadPage`] if the page cannot be read, and
/// [`DoxygenError::FormatMismatch`] if the anchor, the prototype block or the
/// documentation block cannot be found, or one of them is malformed.
pub fn extract_function(
  cache: &mut PageCache,
  function_doc: &FunctionDoc,
) -> Result<Function, DoxygenError> {
  let page = cache.page(&function_doc.doc_file)?;
  let anchor = &function_doc.anchor;

  let marker =
    markup::element_by_id(page.root(), "a", anchor).ok_or_else(|| {
      page.mismatch(format!("no anchor `{anchor}`"))
    })?;
  let item = markup::next_sibling_element(&marker, "div").ok_or_else(|| {
    page.mismatch(format!("no documentation block after anchor `{anchor}`"))
  })?;

  let context = format!("the block for anchor `{anchor}`");
  let proto_div = page.require(&item, "div.memproto", &context)?;
  let doc_div = page.require(&item, "div.memdoc", &context)?;

  Ok(Function {
    proto: parse_proto(&page, &proto_div, &context)?,
    doc:   parse_doc(&page, &doc_div, &context)?,
  })
}

/// Parse the prototype table.
///
/// The name cell reads `<return type> <name>`; the name is the last
/// whitespace-separated token. Each row but the last carries one parameter,
/// the last row only holds the closing parenthesis.
fn parse_proto(
  page: &Document,
  proto_div: &NodeRef,
  context: &str,
) -> Result<Proto, DoxygenError> {
  let name_cell = page.require(proto_div, "td.memname", context)?;
  let signature = markup::text(&name_cell);
  let signature = signature.trim();
  let (return_type, name) = signature
    .rsplit_once(char::is_whitespace)
    .ok_or_else(|| {
      page.mismatch(format!(
        "cannot split `{signature}` into return type and name in {context}"
      ))
    })?;

  let rows = markup::find_all(proto_div, "tr");
  let param_rows = rows.split_last().map_or(&[][..], |(_, rest)| rest);

  let mut params = Vec::with_capacity(param_rows.len());
  for row in param_rows {
    let type_cell = page.require(row, "td.paramtype", context)?;
    let name_cell = page.require(row, "td.paramname em", context)?;
    params.push(Param {
      type_name: markup::text(&type_cell).trim().to_owned(),
      name:      markup::text(&name_cell).trim().to_owned(),
    });
  }

  Ok(Proto {
    return_type: return_type.trim_end().to_owned(),
    name:        name.to_owned(),
    params,
  })
}

fn parse_doc(
  page: &Document,
  doc_div: &NodeRef,
  context: &str,
) -> Result<Doc, DoxygenError> {
  let description = markup::find_all(doc_div, "p")
    .iter()
    .map(markup::text)
    .collect::<Vec<_>>()
    .join("\n");

  let params = markup::find_first(doc_div, "dl.params")
    .map(|list| {
      markup::find_all(&list, "tr")
        .iter()
        .map(|row| parse_doc_param(page, row, context))
        .collect::<Result<Vec<_>, _>>()
    })
    .transpose()?;

  Ok(Doc {
    description:         Some(description).filter(|text| !text.is_empty()),
    supported_platforms: section(page, doc_div, "user", context)?,
    params,
    returns:             section(page, doc_div, "return", context)?,
    remark:              section(page, doc_div, "remark", context)?,
    deprecated:          section(page, doc_div, "deprecated", context)?,
  })
}

/// One row of the parameter table: direction, name, then the description
/// spread over whatever cells remain.
fn parse_doc_param(
  page: &Document,
  row: &NodeRef,
  context: &str,
) -> Result<DocParam, DoxygenError> {
  let cells = markup::find_all(row, "td");
  let [direction, name, description @ ..] = cells.as_slice() else {
    return Err(page.mismatch(format!(
      "parameter row with {} cells in {context}",
      cells.len()
    )));
  };
  if description.is_empty() {
    return Err(page.mismatch(format!(
      "parameter row without a description in {context}"
    )));
  }

  Ok(DocParam {
    direction:   markup::text(direction).trim().to_owned(),
    name:        markup::text(name).trim().to_owned(),
    description: description.iter().map(markup::text).collect(),
  })
}

/// Text of the `<dd>` of the definition list tagged `class`, if the list is
/// present.
fn section(
  page: &Document,
  doc_div: &NodeRef,
  class: &str,
  context: &str,
) -> Result<Option<String>, DoxygenError> {
  let Some(list) = markup::find_first(doc_div, &format!("dl.{class}")) else {
    return Ok(None);
  };
  let body =
    page.require(&list, "dd", &format!("the {class} section of {context}"))?;
  Ok(Some(markup::text(&body)))
}
