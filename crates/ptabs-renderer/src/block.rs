//! Delimited block scanning.
//!
//! Blocks are HTML comments that survive markdown rendering unchanged:
//!
//! ```text
//! <!-- platform: Android -->content<!-- /platform -->
//! <!-- lang: Kotlin -->content<!-- /lang -->
//! ```
//!
//! Each [`BlockKind`] is scanned by its own compiled pattern. Platform and
//! language blocks are never matched by the same scan, so a `<!-- /lang -->`
//! marker cannot close a platform block.

use std::sync::LazyLock;

use regex::Regex;

static PLATFORM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| block_pattern("platform"));

static LANG_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| block_pattern("lang"));

/// Build the pattern for `<!-- KEYWORD: NAME -->CONTENT<!-- /KEYWORD -->`.
///
/// The name must start with a non-space character so a bare `<!-- platform: -->`
/// never yields an empty branch name. Content matching is lazy: the first
/// closing marker after an opening marker ends the block.
fn block_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(
        r"(?s)<!--\s*{keyword}:\s*([^\s>][^>]*?)\s*-->(.*?)<!--\s*/{keyword}\s*-->"
    ))
    .unwrap()
}

/// Kind of delimited block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// `<!-- platform: NAME -->` ... `<!-- /platform -->`
    Platform,
    /// `<!-- lang: NAME -->` ... `<!-- /lang -->`
    Lang,
}

impl BlockKind {
    /// Keyword used in the opening and closing markers.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Lang => "lang",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Platform => &PLATFORM_BLOCK_RE,
            Self::Lang => &LANG_BLOCK_RE,
        }
    }

    /// Scan `text` for blocks of this kind, left to right.
    ///
    /// Returns blocks in source order. Text outside blocks is ignored. An empty
    /// result means no block was found; it is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use ptabs_renderer::BlockKind;
    ///
    /// let blocks = BlockKind::Platform.scan(
    ///     "<!-- platform: iOS -->Hi<!-- /platform --><!-- platform: Android -->Hey<!-- /platform -->",
    /// );
    /// assert_eq!(blocks.len(), 2);
    /// assert_eq!(blocks[1].name, "Android");
    /// assert_eq!(blocks[1].content, "Hey");
    /// ```
    #[must_use]
    pub fn scan(self, text: &str) -> Vec<Branch> {
        self.pattern()
            .captures_iter(text)
            .map(|caps| Branch {
                name: caps[1].trim().to_owned(),
                content: caps[2].trim().to_owned(),
            })
            .collect()
    }
}

/// One named alternative inside a container or a platform.
///
/// Names are case-sensitive and not deduplicated: two blocks with the same
/// name produce two branches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Branch {
    /// Trimmed block argument (e.g. `Android`, `Kotlin`).
    pub name: String,
    /// Raw text between the markers, trimmed.
    pub content: String,
}

/// A platform branch together with the language branches found in its content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlatformBranch {
    /// The platform block itself.
    pub branch: Branch,
    /// Language blocks inside the platform content, in source order.
    pub languages: Vec<Branch>,
}

impl PlatformBranch {
    /// Scan the language level of an already parsed platform branch.
    #[must_use]
    pub fn from_branch(branch: Branch) -> Self {
        let languages = BlockKind::Lang.scan(&branch.content);
        Self { branch, languages }
    }

    /// Platform name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.branch.name
    }
}

impl AsRef<str> for Branch {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for PlatformBranch {
    fn as_ref(&self) -> &str {
        self.name()
    }
}
