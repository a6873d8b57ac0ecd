mod chunk;

pub use chunk::SQLChunk;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt::Debug;

/// Values that can be bound as statement parameters.
pub trait SQLParam: Clone + Debug {}

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation. Values only ever travel as `Param` chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct SQL<'a, V: SQLParam> {
    pub chunks: SmallVec<[SQLChunk<'a, V>; 8]>,
}

impl<'a, V: SQLParam> Default for SQL<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V: SQLParam> SQL<'a, V> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single parameter value
    #[inline]
    pub fn param(value: impl Into<V>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(value.into())],
        }
    }

    // ==================== builders ====================

    /// Appends another fragment
    pub fn append(mut self, other: impl Into<SQL<'a, V>>) -> Self {
        self.append_mut(other);
        self
    }

    /// Appends another fragment in place
    pub fn append_mut(&mut self, other: impl Into<SQL<'a, V>>) {
        let other = other.into();
        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        self.chunks.extend(other.chunks);
    }

    /// Wraps the fragment in parentheses
    pub fn parens(self) -> Self {
        SQL::raw("(").append(self).append(SQL::raw(")"))
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: &'static str) -> SQL<'a, V>
    where
        T: IntoIterator<Item = SQL<'a, V>>,
    {
        let mut iter = sqls.into_iter();
        let Some(mut result) = iter.next() else {
            return SQL::empty();
        };
        for sql in iter {
            result.chunks.push(SQLChunk::raw_static(separator));
            result.chunks.extend(sql.chunks);
        }
        result
    }

    // ==================== rendering ====================

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Renders the statement text with `?` for every parameter.
    pub fn sql(&self) -> String {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(128));
        for chunk in &self.chunks {
            chunk.write_to(&mut buf);
        }
        buf
    }

    /// Parameter values in the order their `?` appear.
    pub fn params(&self) -> impl Iterator<Item = &V> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Param(value) => Some(value),
            _ => None,
        })
    }

    /// Generates the SQL string and collects parameter references in a single pass.
    pub fn build(&self) -> (String, SmallVec<[&V; 8]>) {
        (self.sql(), self.params().collect())
    }
}
