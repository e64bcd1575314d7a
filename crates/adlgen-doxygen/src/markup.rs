//! Thin query layer over `kuchikikiki`, plus the per-run page cache.
//!
//! Every other module asks questions of the HTML through the helpers here:
//! CSS-selector lookups over descendants, exact id lookups, sibling walks and
//! text extraction. Lookups that the page layout requires go through
//! [`Document::require`], which turns a miss into a
//! [`DoxygenError::FormatMismatch`] naming the page.
use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
};

use kuchikikiki::{NodeRef, parse_html};
use log::debug;
use tendril::TendrilSink;

use crate::error::DoxygenError;

/// A parsed HTML page.
///
/// Cloning is cheap: the tree itself is reference counted.
#[derive(Clone)]
pub struct Document {
  path: PathBuf,
  root: NodeRef,
}

impl std::fmt::Debug for Document {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Document")
      .field("path", &self.path)
      .finish_non_exhaustive()
  }
}

impl Document {
  /// Parse `html`, remembering `path` for error messages.
  #[must_use]
  pub fn parse(path: impl Into<PathBuf>, html: &str) -> Self {
    Self {
      path: path.into(),
      root: parse_html().one(html),
    }
  }

  /// Read and parse a page from disk.
  ///
  /// Invalid UTF-8 is replaced with U+FFFD rather than rejected or dropped;
  /// vendor pages are not always clean.
  ///
  /// # Errors
  ///
  /// Returns [`DoxygenError::ReadPage`] if the file cannot be read.
  pub fn from_file(path: &Path) -> Result<Self, DoxygenError> {
    let bytes = fs::read(path).map_err(|source| {
      DoxygenError::ReadPage {
        path: path.to_path_buf(),
        source,
      }
    })?;
    Ok(Self::parse(path, &String::from_utf8_lossy(&bytes)))
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  #[must_use]
  pub const fn root(&self) -> &NodeRef {
    &self.root
  }

  /// Build a layout error pointing at this page.
  pub fn mismatch(&self, detail: impl Into<String>) -> DoxygenError {
    DoxygenError::mismatch(&self.path, detail)
  }

  /// First element under `scope` matching `selector`, or a layout error
  /// mentioning `context`.
  ///
  /// # Errors
  ///
  /// Returns [`DoxygenError::FormatMismatch`] when nothing matches.
  pub fn require(
    &self,
    scope: &NodeRef,
    selector: &str,
    context: &str,
  ) -> Result<NodeRef, DoxygenError> {
    find_first(scope, selector)
      .ok_or_else(|| self.mismatch(format!("no `{selector}` in {context}")))
  }
}

/// First descendant of `scope` (or `scope` itself) matching `selector`.
#[must_use]
pub fn find_first(scope: &NodeRef, selector: &str) -> Option<NodeRef> {
  scope
    .select_first(selector)
    .ok()
    .map(|element| element.as_node().clone())
}

/// All descendants of `scope` matching `selector`, in document order.
#[must_use]
pub fn find_all(scope: &NodeRef, selector: &str) -> Vec<NodeRef> {
  scope
    .select(selector)
    .map(|matches| {
      matches.map(|element| element.as_node().clone()).collect()
    })
    .unwrap_or_default()
}

/// Value of attribute `name` if `node` is an element carrying it.
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
  node.as_element().and_then(|element| {
    element.attributes.borrow().get(name).map(str::to_owned)
  })
}

/// Concatenated text of `node` and all its descendants.
#[must_use]
pub fn text(node: &NodeRef) -> String {
  node.text_contents()
}

/// The first `<tag>` under `scope` whose `id` attribute equals `id`.
///
/// Compared verbatim instead of through a selector string, so ids with CSS
/// metacharacters still match.
#[must_use]
pub fn element_by_id(scope: &NodeRef, tag: &str, id: &str) -> Option<NodeRef> {
  find_all(scope, tag)
    .into_iter()
    .find(|node| attr(node, "id").as_deref() == Some(id))
}

/// First sibling element after `node` with the tag name `tag`.
#[must_use]
pub fn next_sibling_element(node: &NodeRef, tag: &str) -> Option<NodeRef> {
  let mut sibling = node.next_sibling();
  while let Some(candidate) = sibling {
    if let Some(element) = candidate.as_element()
      && element.name.local.as_ref() == tag
    {
      return Some(candidate);
    }
    sibling = candidate.next_sibling();
  }
  None
}

/// Parsed pages keyed by their path, filled on first access and kept for the
/// whole run.
///
/// Doxygen puts the detailed documentation of many functions on one page, so
/// each page is parsed once however many anchors point into it.
#[derive(Debug)]
pub struct PageCache {
  root:  PathBuf,
  pages: HashMap<PathBuf, Document>,
}

impl PageCache {
  /// Create an empty cache resolving page names against `root`.
  #[must_use]
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root:  root.into(),
      pages: HashMap::new(),
    }
  }

  #[must_use]
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Fetch the page `name` (relative to the documentation root), parsing it
  /// on first use.
  ///
  /// # Errors
  ///
  /// Returns [`DoxygenError::ReadPage`] if the page cannot be read.
  pub fn page(&mut self, name: &str) -> Result<Document, DoxygenError> {
    let path = self.root.join(name);
    if let Some(document) = self.pages.get(&path) {
      return Ok(document.clone());
    }

    debug!("Parsing {}", path.display());
    let document = Document::from_file(&path)?;
    self.pages.insert(path, document.clone());
    Ok(document)
  }

  /// Number of distinct pages parsed so far.
  #[must_use]
  pub fn len(&self) -> usize {
    self.pages.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pages.is_empty()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  const PAGE: &str = r#"<html><body>
<div class="outer">
  <a id="first"></a><p>between</p><div class="block">one</div>
  <a id="ga1b2#odd"></a>
  <div class="block">two <em>emphasised</em></div>
</div>
</body></html>"#;

  #[test]
  fn test_find_first_and_all() {
    let doc = Document::parse("page.html", PAGE);
    let blocks = find_all(doc.root(), "div.block");
    assert_eq!(blocks.len(), 2);
    assert_eq!(text(&blocks[1]), "two emphasised");
    assert!(find_first(doc.root(), "table.directory").is_none());
  }

  #[test]
  fn test_require_names_selector_and_page() {
    let doc = Document::parse("files.html", PAGE);
    let err = doc
      .require(doc.root(), "table.directory", "the file listing")
      .err()
      .expect("selector should not match");
    let message = err.to_string();
    assert!(message.contains("files.html"));
    assert!(message.contains("table.directory"));
    assert!(message.contains("the file listing"));
  }

  #[test]
  fn test_element_by_id_matches_verbatim() {
    let doc = Document::parse("page.html", PAGE);
    let anchor =
      element_by_id(doc.root(), "a", "ga1b2#odd").expect("anchor exists");
    let block = next_sibling_element(&anchor, "div").expect("sibling div");
    assert_eq!(text(&block), "two emphasised");
  }

  #[test]
  fn test_next_sibling_skips_other_tags() {
    let doc = Document::parse("page.html", PAGE);
    let anchor = element_by_id(doc.root(), "a", "first").expect("anchor");
    let block = next_sibling_element(&anchor, "div").expect("sibling div");
    assert_eq!(text(&block), "one");
    assert_eq!(attr(&block, "class").as_deref(), Some("block"));
  }

  #[test]
  fn test_cache_parses_each_page_once() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("a.html"), PAGE).expect("write page");

    let mut cache = PageCache::new(dir.path());
    assert!(cache.is_empty());
    cache.page("a.html").expect("first load");
    cache.page("a.html").expect("cached load");
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn test_cache_reports_missing_page() {
    let dir = tempdir().expect("tempdir");
    let mut cache = PageCache::new(dir.path());
    let err = cache.page("missing.html").expect_err("page is absent");
    assert!(matches!(err, DoxygenError::ReadPage { .. }));
  }

  #[test]
  fn test_lossy_decoding() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.html");
    fs::write(&path, b"<p>caf\xe9</p>").expect("write page");
    let doc = Document::from_file(&path).expect("lossy read");
    let para = find_first(doc.root(), "p").expect("paragraph");
    assert_eq!(text(&para), "caf\u{FFFD}");
  }
}
