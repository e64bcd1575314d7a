//! Finds the functions declared by one documented file.
//!
//! A Doxygen file page has several `memberdecls` tables (macros, typedefs,
//! functions). The function table is the one holding the `func-members`
//! section marker; each `memitem:` row in it links to the page and anchor of
//! the full documentation block.
use crate::{
  error::DoxygenError,
  markup::{self, PageCache},
  types::{File, FunctionDoc},
};

const FUNCTION_SECTION: &str = r#"a[name="func-members"]"#;
const MEMBER_ROW: &str = r#"tr[class^="memitem:"]"#;

/// Locate every function documented for `file`, in page order.
///
/// # Errors
///
/// Returns [`DoxygenError::ReadPage`] if the file's page cannot be read and
/// [`DoxygenError::FormatMismatch`] if the page has no function section, or a
/// member row does not link to a `page#anchor` target.
pub fn list_functions(
  cache: &mut PageCache,
  file: &File,
) -> Result<Vec<FunctionDoc>, DoxygenError> {
  let page = cache.page(&file.doc_file)?;

  let table = markup::find_all(page.root(), "table.memberdecls")
    .into_iter()
    .find(|table| markup::find_first(table, FUNCTION_SECTION).is_some())
    .ok_or_else(|| {
      page.mismatch(format!(
        "no function member table documenting {}",
        file.out_file
      ))
    })?;

  markup::find_all(&table, MEMBER_ROW)
    .iter()
    .map(|row| -> Result<FunctionDoc, DoxygenError> {
      let link = markup::find_first(row, "td.memItemRight a")
        .ok_or_else(|| page.mismatch("member row without a link"))?;
      let href = markup::attr(&link, "href").unwrap_or_default();
      let (doc_file, anchor) = href.split_once('#').ok_or_else(|| {
        page.mismatch(format!("member link `{href}` has no anchor"))
      })?;

      Ok(FunctionDoc {
        doc_file: doc_file.to_owned(),
        anchor:   anchor.to_owned(),
        out_file: file.out_file.clone(),
      })
    })
    .collect()
}
