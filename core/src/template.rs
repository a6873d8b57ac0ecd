//! Named-parameter templates for native queries.
//!
//! A template is opaque SQL text with `#{name}` placeholders. Parsing rewrites
//! every placeholder to a numbered driver parameter (`?1`, `?2`, ...), one
//! number per distinct name, and remembers which name owns which number.
//! Caller values are only ever bound, never spliced into the text.

use crate::error::{FlowdefError, Result};
use crate::placeholder::Placeholder;
use compact_str::CompactString;
use hashbrown::HashMap;
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTemplate {
    sql: CompactString,
    placeholders: SmallVec<[Placeholder; 4]>,
}

impl NamedTemplate {
    /// Parses `template`. Anything that is not a well-formed `#{name}` is kept
    /// verbatim and left for the store to accept or reject.
    pub fn parse(template: &str) -> Self {
        let mut sql = String::with_capacity(template.len());
        let mut placeholders: SmallVec<[Placeholder; 4]> = SmallVec::new();
        let mut rest = template;

        while let Some(start) = rest.find("#{") {
            sql.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let name_len = after
                .find(|c: char| !Placeholder::is_name_char(c))
                .unwrap_or(after.len());

            if name_len == 0 || !after[name_len..].starts_with('}') {
                sql.push_str("#{");
                rest = after;
                continue;
            }

            let name = &after[..name_len];
            let index = match placeholders.iter().position(|p| p.name == name) {
                Some(position) => position + 1,
                None => {
                    placeholders.push(Placeholder::named(name));
                    placeholders.len()
                }
            };
            sql.push_str(&Placeholder::render(index));
            rest = &after[name_len + 1..];
        }
        sql.push_str(rest);

        Self {
            sql: CompactString::from(sql),
            placeholders,
        }
    }

    /// The rewritten SQL with numbered positional parameters.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Placeholders in parameter-number order.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Orders bound values by parameter number. Every placeholder needs a
    /// value; bindings with no placeholder are ignored.
    pub fn bind<V: Clone>(&self, values: &HashMap<CompactString, V>) -> Result<SmallVec<[V; 8]>> {
        self.placeholders
            .iter()
            .map(|placeholder| {
                values.get(&placeholder.name).cloned().ok_or_else(|| {
                    FlowdefError::ParameterError(format!("no value bound for {placeholder}"))
                })
            })
            .collect()
    }
}
