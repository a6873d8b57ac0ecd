use crate::sql::SQLParam;
use std::borrow::Cow;

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Raw` - Unquoted SQL text (keywords, operators, column names)
/// - `Param` - A bound value, rendered as `?`
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk<'a, V: SQLParam> {
    /// Renders as: text (no quotes, as-is)
    Raw(Cow<'a, str>),

    /// Renders as: ?
    Param(V),
}

impl<'a, V: SQLParam> SQLChunk<'a, V> {
    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    pub(crate) fn write_to(&self, buf: &mut String) {
        match self {
            SQLChunk::Raw(text) => buf.push_str(text),
            SQLChunk::Param(_) => buf.push('?'),
        }
    }
}
