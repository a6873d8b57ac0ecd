//! Normalized "like" patterns.
//!
//! Callers write patterns with `%` (any run of characters) and `_` (exactly one
//! character); `\` escapes the next character. Everything else is literal and
//! case-sensitive. The pattern is parsed once and rendered into whatever syntax
//! the store understands, so store collation never changes what matches.

use crate::error::{FlowdefError, Result};
use compact_str::CompactString;
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyRun,
    AnyOne,
}

/// A parsed substring/wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    raw: CompactString,
    tokens: SmallVec<[Token; 16]>,
}

impl LikePattern {
    /// Parses `pattern`. A trailing lone `\` is rejected.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut tokens = SmallVec::new();
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let token = match c {
                '%' => Token::AnyRun,
                '_' => Token::AnyOne,
                '\\' => match chars.next() {
                    Some(escaped) => Token::Literal(escaped),
                    None => {
                        return Err(FlowdefError::invalid_argument(format!(
                            "pattern '{pattern}' ends with a dangling escape"
                        )));
                    }
                },
                other => Token::Literal(other),
            };
            tokens.push(token);
        }
        Ok(Self {
            raw: CompactString::new(pattern),
            tokens,
        })
    }

    /// Renders the pattern for SQLite's case-sensitive `GLOB` operator.
    pub fn to_glob(&self) -> String {
        let mut glob = String::with_capacity(self.raw.len() + 4);
        for token in &self.tokens {
            match token {
                Token::AnyRun => glob.push('*'),
                Token::AnyOne => glob.push('?'),
                Token::Literal(c @ ('*' | '?' | '[')) => {
                    glob.push('[');
                    glob.push(*c);
                    glob.push(']');
                }
                Token::Literal(c) => glob.push(*c),
            }
        }
        glob
    }
}
