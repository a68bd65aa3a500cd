//! Client switcher behavior on rendered containers.
//!
//! Drives `assets/platform-tabs.js` under Node with the markup produced by
//! `ptabs-renderer`. Skipped when `node` is not installed.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use ptabs_renderer::{BuildContext, rewrite_page};

const PAGE: &str = concat!(
    r#"<!-- codesample id="cs" -->"#,
    "<!-- platform: iOS -->",
    "<!-- lang: Swift -->swift<!-- /lang --><!-- lang: ObjC -->objc<!-- /lang -->",
    "<!-- /platform -->",
    "<!-- platform: Android -->",
    "<!-- lang: Kotlin -->kotlin<!-- /lang --><!-- lang: Java -->java<!-- /lang -->",
    "<!-- /platform -->",
    "<!-- /codesample -->",
    r#"<!-- platformtabs id="pt" -->"#,
    "<!-- platform: Android -->first<!-- /platform -->",
    "<!-- platform: Android -->second<!-- /platform -->",
    "<!-- platform: iOS -->ios<!-- /platform -->",
    "<!-- /platformtabs -->",
);

fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

#[test]
fn test_switcher_on_rendered_page() {
    if !node_available() {
        eprintln!("node not found, skipping switcher behavior test");
        return;
    }

    let mut ctx = BuildContext::new("Android");
    let html = rewrite_page(&mut ctx, PAGE).html;
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let mut child = Command::new("node")
        .arg(manifest_dir.join("tests/js/switcher.js"))
        .arg(manifest_dir.join("assets").join(ptabs_assets::SCRIPT))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(html.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(
        output.status.success(),
        "switcher checks failed:\n{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
