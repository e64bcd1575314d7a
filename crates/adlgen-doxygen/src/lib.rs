//! `adlgen-doxygen`.
//!
//! Reads the Doxygen HTML that ships with the AMD Display Library SDK and
//! turns it into plain records: the documented files, the functions each file
//! declares, and for every function its prototype and structured
//! documentation.
//!
//! The layout assumptions are strict. Any page that does not look the way the
//! extractor expects yields [`DoxygenError::FormatMismatch`] instead of a
//! partial result.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeSet;
//!
//! use adlgen_doxygen::{
//!   PageCache,
//!   extract_function,
//!   list_files,
//!   list_functions,
//! };
//!
//! let mut cache = PageCache::new("sdk/Public-Documents/html");
//! let listing = cache.page("files.html")?;
//! for file in list_files(&listing, &BTreeSet::new())? {
//!   for function_doc in list_functions(&mut cache, &file)? {
//!     let function = extract_function(&mut cache, &function_doc)?;
//!     println!("{}: {}", file.out_file, function.proto.name);
//!   }
//! }
//! # Ok::<(), adlgen_doxygen::DoxygenError>(())
//! ```

pub mod error;
mod extractor;
mod index;
mod locator;
pub mod markup;
mod types;

pub use error::DoxygenError;
pub use extractor::extract_function;
pub use index::{list_files, read_prebuilt};
pub use locator::list_functions;
pub use markup::{Document, PageCache};
pub use types::{Doc, DocParam, File, Function, FunctionDoc, Param, Proto};
