//! Stylesheet and client switcher script for ptabs.
//!
//! Provides a single API for accessing the assets in both embedded and
//! filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from the crate's `assets/` directory at runtime

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::Path;

/// Stylesheet path, relative to the asset root.
pub const STYLESHEET: &str = "platform-tabs.css";

/// Client switcher script path, relative to the asset root.
pub const SCRIPT: &str = "platform-tabs.js";

/// Embedded assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset access (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Get an asset by path (relative to the asset root).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to the asset root).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    let full_path = Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Iterate all available asset paths.
#[cfg(feature = "embed")]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Iterate all available asset paths.
#[cfg(not(feature = "embed"))]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    let mut names: Vec<String> = std::fs::read_dir(DEV_DIR)
        .into_iter()
        .flatten()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.into_iter().map(Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptabs_renderer::{ContainerKind, Level, markup::classes};

    fn text(path: &str) -> String {
        let data = get(path).unwrap_or_else(|| panic!("asset {path} missing"));
        String::from_utf8(data.into_owned()).unwrap()
    }

    #[test]
    fn test_get_known_assets() {
        assert!(get(STYLESHEET).is_some());
        assert!(get(SCRIPT).is_some());
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent/file.xyz").is_none());
    }

    #[test]
    fn test_iter_lists_assets() {
        let paths: Vec<_> = iter().collect();
        assert!(paths.iter().any(|p| p == STYLESHEET));
        assert!(paths.iter().any(|p| p == SCRIPT));
    }

    #[test]
    fn test_script_uses_rendered_attributes() {
        let script = text(SCRIPT);

        for level in [Level::Platform, Level::Language] {
            for name in [
                level.tab_class(),
                level.header_class(),
                level.body_class(),
                level.pane_class(),
                level.name_attr(),
                level.scope_attr(),
            ] {
                assert!(script.contains(name), "script does not reference {name}");
            }
        }
        for kind in [ContainerKind::PlatformTabs, ContainerKind::CodeSample] {
            assert!(script.contains(kind.root_class()));
        }
        assert!(script.contains(&format!("'{}'", classes::ACTIVE)));
        assert!(script.contains("resize"));
    }

    #[test]
    fn test_stylesheet_covers_rendered_classes() {
        let css = text(STYLESHEET);

        for level in [Level::Platform, Level::Language] {
            assert!(css.contains(&format!(".{}.active", level.tab_class())));
            assert!(css.contains(&format!(".{}.active", level.pane_class())));
        }
        assert!(css.contains(&format!(".{}", classes::ERROR)));
    }
}
