//! Initial active branch selection.

/// Policy for choosing which branch starts active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultBranch<'a> {
    /// First branch with exactly this name, falling back to the first branch.
    Named(&'a str),
    /// Always the first branch.
    First,
}

impl DefaultBranch<'_> {
    /// Index of the branch that starts active, or `None` for an empty list.
    ///
    /// Name comparison is exact and case-sensitive. When several branches
    /// share the preferred name, only the first one is selected.
    ///
    /// # Example
    ///
    /// ```
    /// use ptabs_renderer::DefaultBranch;
    ///
    /// let platforms = ["iOS", "Android", "HarmonyOS"];
    /// assert_eq!(DefaultBranch::Named("Android").select(&platforms), Some(1));
    /// assert_eq!(DefaultBranch::Named("Windows").select(&platforms), Some(0));
    /// assert_eq!(DefaultBranch::First.select(&platforms), Some(0));
    /// ```
    #[must_use]
    pub fn select<T: AsRef<str>>(self, branches: &[T]) -> Option<usize> {
        if branches.is_empty() {
            return None;
        }
        let preferred = match self {
            Self::Named(name) => branches.iter().position(|b| b.as_ref() == name),
            Self::First => None,
        };
        Some(preferred.unwrap_or(0))
    }
}
