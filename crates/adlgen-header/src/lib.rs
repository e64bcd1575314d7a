//! `adlgen-header`.
//!
//! Renders the records produced by `adlgen-doxygen` as C headers: one aligned
//! documentation comment and declaration per function, wrapped in include
//! guards, plus the `functions.h` umbrella header that pulls everything in.
//!
//! Rendering is a pure function of its input. Given the same records the
//! output is byte-for-byte identical.

pub mod header;
pub mod render;
pub mod structs;

pub use header::{include_guard, render_header, render_umbrella};
pub use render::{render_doc, render_function, render_prototype};
pub use structs::{UNKNOWN_STRUCTS, UnknownStruct};
