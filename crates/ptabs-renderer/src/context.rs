//! Build-scoped rendering state.

use crate::markup::ContainerKind;

/// Default platform used when none is configured.
pub const DEFAULT_PLATFORM: &str = "Android";

/// State shared by every page of one documentation build.
///
/// Owns the counter behind generated container ids. Create one context per
/// build (or call [`reset`](Self::reset) at build start) and pass it to every
/// page rewrite; ids are unique within the build and restart with the next one.
///
/// # Example
///
/// ```
/// use ptabs_renderer::{BuildContext, ContainerKind};
///
/// let mut ctx = BuildContext::new("Android");
/// assert_eq!(ctx.generate_id(ContainerKind::PlatformTabs), "platform-tabs-1");
/// assert_eq!(ctx.generate_id(ContainerKind::CodeSample), "code-sample-2");
///
/// ctx.reset();
/// assert_eq!(ctx.generate_id(ContainerKind::CodeSample), "code-sample-1");
/// ```
#[derive(Debug)]
pub struct BuildContext {
    default_platform: String,
    id_counter: u64,
}

impl BuildContext {
    /// Create a context for a new build.
    #[must_use]
    pub fn new(default_platform: impl Into<String>) -> Self {
        Self {
            default_platform: default_platform.into(),
            id_counter: 0,
        }
    }

    /// Platform that starts active when a container defines it.
    #[must_use]
    pub fn default_platform(&self) -> &str {
        &self.default_platform
    }

    /// Restart id generation for a new build.
    pub fn reset(&mut self) {
        self.id_counter = 0;
    }

    /// Next generated container id, `<prefix>-<n>` with `n` starting at 1.
    ///
    /// The counter is shared by all container kinds.
    pub fn generate_id(&mut self, kind: ContainerKind) -> String {
        self.id_counter += 1;
        format!("{}-{}", kind.id_prefix(), self.id_counter)
    }

    /// Number of ids generated since the build started.
    #[must_use]
    pub fn generated_ids(&self) -> u64 {
        self.id_counter
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM)
    }
}
