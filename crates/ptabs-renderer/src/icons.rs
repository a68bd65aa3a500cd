//! Platform icon lookup.

/// Icon used for platforms missing from the table.
pub const DEFAULT_ICON: &str = "fa-code";

const PLATFORM_ICONS: &[(&str, &str)] = &[
    ("Android", "fa-android"),
    ("iOS", "fa-apple"),
    ("HarmonyOS", "fa-mobile"),
];

/// Font Awesome class for a platform name (exact match).
#[must_use]
pub fn platform_icon(platform: &str) -> &'static str {
    PLATFORM_ICONS
        .iter()
        .find(|(name, _)| *name == platform)
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms() {
        assert_eq!(platform_icon("Android"), "fa-android");
        assert_eq!(platform_icon("iOS"), "fa-apple");
        assert_eq!(platform_icon("HarmonyOS"), "fa-mobile");
    }

    #[test]
    fn test_unknown_platform_uses_default() {
        assert_eq!(platform_icon("Windows"), DEFAULT_ICON);
        assert_eq!(platform_icon("ios"), DEFAULT_ICON);
    }
}
