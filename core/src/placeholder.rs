use compact_str::CompactString;
use core::fmt;

/// A `#{name}` parameter placeholder in a native query template.
///
/// The name is semantic; the SQL the driver sees uses the numbered positional
/// form `?N`, rendered by [`Placeholder::render`].
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Placeholder {
    /// The semantic name of the parameter (used for binding by name).
    pub name: CompactString,
}

impl Placeholder {
    pub fn named(name: impl Into<CompactString>) -> Self {
        Placeholder { name: name.into() }
    }

    /// Renders the driver-facing placeholder for the given 1-based index.
    #[inline]
    pub fn render(index: usize) -> String {
        format!("?{index}")
    }

    /// Whether `c` may appear inside `#{...}`.
    #[inline]
    pub(crate) fn is_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '.'
    }
}

impl fmt::Display for Placeholder {
    /// Displays the placeholder as written in a template: `#{name}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{{{}}}", self.name)
    }
}
