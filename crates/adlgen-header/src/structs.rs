/// A type that appears in function signatures but is defined neither in the
/// pre-built headers nor in the documentation.
///
/// Each one is emitted as a `#define` so the generated headers still parse;
/// anything missing from [`UNKNOWN_STRUCTS`] surfaces as a compile error in the
/// consuming binding, which is how new ones get noticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStruct {
  pub name:       &'static str,
  pub is_pointer: bool,
}

impl UnknownStruct {
  const fn opaque(name: &'static str) -> Self {
    Self {
      name,
      is_pointer: false,
    }
  }

  const fn pointer(name: &'static str) -> Self {
    Self {
      name,
      is_pointer: true,
    }
  }

  /// The placeholder line, e.g. `#define BINFILE void`.
  #[must_use]
  pub fn define(&self) -> String {
    let target = if self.is_pointer { "void *" } else { "void" };
    format!("#define {} {target}", self.name)
  }
}

/// Hand-maintained list of opaque types used by the ADL API.
pub const UNKNOWN_STRUCTS: &[UnknownStruct] = &[
  UnknownStruct::opaque("ADL_DL_DISPLAYMODEINFO"),
  UnknownStruct::opaque("ADL_DL_DISPLAY_MODE"),
  UnknownStruct::opaque("ADLVulkanAppInfo"),
  UnknownStruct::opaque("BINFILE"),
  UnknownStruct::opaque("BOOL"),
  UnknownStruct::opaque("CUSTOMISATIONS"),
  UnknownStruct::opaque("DATATYPES"),
  UnknownStruct::pointer("LPXScreenInfo"),
  UnknownStruct::opaque("PRIVACYTYPES"),
];
