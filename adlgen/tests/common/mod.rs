use std::{fs, path::Path};

use adlgen::config::Config;

pub const FILES_HTML: &str = r#"<html><body><div class="contents">
<table class="directory">
<tr id="row_0_"><td class="entry"><a class="el" href="adl__sdk_8h.html" target="_self">adl_sdk.h</a></td></tr>
<tr id="row_1_"><td class="entry"><a class="el" href="adapter_8h.html" target="_self">adapter.h</a></td></tr>
<tr id="row_2_"><td class="entry"><a class="el" href="void_8h.html" target="_self">void.h</a></td></tr>
</table>
</div></body></html>"#;

/// A file page whose function table points at `group` for every anchor.
pub fn file_page(group: &str, anchors: &[(&str, &str)]) -> String {
  let rows: String = anchors
    .iter()
    .map(|(anchor, name)| {
      format!(
        r#"<tr class="memitem:{anchor}"><td class="memItemLeft">int&#160;</td><td class="memItemRight"><a class="el" href="{group}#{anchor}">{name}</a> ()</td></tr>
<tr class="memdesc:{anchor}"><td class="mdescLeft">&#160;</td><td class="mdescRight">Summary.</td></tr>
"#
      )
    })
    .collect();

  format!(
    r#"<html><body><div class="contents">
<table class="memberdecls">
<tr class="heading"><td colspan="2"><h2 class="groupheader"><a name="func-members"></a>Functions</h2></td></tr>
{rows}</table>
</div></body></html>"#
  )
}

pub const ADAPTER_GROUP: &str = r##"<html><body><div class="contents">
<a id="ga01"></a>
<h2 class="memtitle">ADL2_Adapter_Active_Get()</h2>
<div class="memitem">
<div class="memproto">
<table class="memname">
<tr><td class="memname">int ADL2_Adapter_Active_Get </td><td>(</td><td class="paramtype">ADL_CONTEXT_HANDLE&#160;</td><td class="paramname"><em>context</em>, </td></tr>
<tr><td class="paramkey"></td><td></td><td class="paramtype">int&#160;</td><td class="paramname"><em>iAdapterIndex</em>, </td></tr>
<tr><td class="paramkey"></td><td></td><td class="paramtype">int *&#160;</td><td class="paramname"><em>lpStatus</em>&#160;</td></tr>
<tr><td></td><td>)</td><td></td><td></td></tr>
</table>
</div><div class="memdoc">
<p>Function to retrieve adapter active status.</p>
<dl class="params"><dt>Parameters</dt><dd>
<table class="params">
<tr><td class="paramdir">[in]</td><td class="paramname">context</td><td>Client's ADL context handle. </td></tr>
<tr><td class="paramdir">[in]</td><td class="paramname">iAdapterIndex</td><td>The ADL index handle. </td></tr>
<tr><td class="paramdir">[out]</td><td class="paramname">lpStatus</td><td>The active status. </td></tr>
</table>
</dd></dl>
<dl class="section return"><dt>Returns</dt><dd>ADL_OK on success. </dd></dl>
</div>
</div>

<a id="ga02"></a>
<h2 class="memtitle">ADL2_Adapter_Crossfire_Get()</h2>
<div class="memitem">
<div class="memproto">
<table class="memname">
<tr><td class="memname">int ADL2_Adapter_Crossfire_Get </td><td>(</td><td class="paramtype">ADL_CONTEXT_HANDLE&#160;</td><td class="paramname"><em>context</em>, </td></tr>
<tr><td class="paramkey"></td><td></td><td class="paramtype">ADLCrossfireComb *&#160;</td><td class="paramname"><em>lpCrossfireComb</em>&#160;</td></tr>
<tr><td></td><td>)</td><td></td><td></td></tr>
</table>
</div><div class="memdoc">
<p>Function to get CrossFire combinations.</p>
<dl class="deprecated"><dt><b>Deprecated:</b></dt><dd>Use the ADL2 CrossfireX APIs.</dd></dl>
</div>
</div>
</div></body></html>"##;

pub const VOID_GROUP: &str = r##"<html><body><div class="contents">
<a id="ga10"></a>
<h2 class="memtitle">ADL_Void_Function()</h2>
<div class="memitem">
<div class="memproto">
<table class="memname">
<tr><td class="memname">void ADL_Void_Function </td><td>(</td><td class="paramname"></td><td>)</td></tr>
</table>
</div><div class="memdoc">
<p>Does nothing.</p>
</div>
</div>
</div></body></html>"##;

/// Lay out an unpacked SDK under `root`.
pub fn write_sdk(root: &Path) {
  let include = root.join("include");
  let html = root.join("Public-Documents").join("html");
  fs::create_dir_all(&include).expect("Failed to create include dir");
  fs::create_dir_all(&html).expect("Failed to create html dir");

  for name in ["adl_defines.h", "adl_sdk.h", "adl_structures.h"] {
    fs::write(include.join(name), format!("/* {name} */\n"))
      .expect("Failed to write pre-built header");
  }

  let pages = [
    ("files.html", FILES_HTML.to_string()),
    (
      "adapter_8h.html",
      file_page("group__ADAPTER.html", &[
        ("ga01", "ADL2_Adapter_Active_Get"),
        ("ga02", "ADL2_Adapter_Crossfire_Get"),
      ]),
    ),
    (
      "void_8h.html",
      file_page("group__VOID.html", &[("ga10", "ADL_Void_Function")]),
    ),
    ("group__ADAPTER.html", ADAPTER_GROUP.to_string()),
    ("group__VOID.html", VOID_GROUP.to_string()),
  ];
  for (name, contents) in pages {
    fs::write(html.join(name), contents).expect("Failed to write page");
  }
}

pub fn config_for(sdk_dir: &Path, output_dir: &Path) -> Config {
  Config {
    sdk_dir: Some(sdk_dir.to_path_buf()),
    output_dir: output_dir.to_path_buf(),
    ..Config::default()
  }
}
