//! Identifier substitution applied while staging.

use std::borrow::Cow;

use regex::bytes::{NoExpand, Regex};

use crate::error::{Result, StageError};

/// How the old identifier is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplaceMode {
    /// Match the identifier text exactly.
    #[default]
    Literal,
    /// Treat the identifier as a regular expression.
    Pattern,
}

/// Compiled replacement of one identifier with another.
///
/// Matching runs over raw bytes, so content that is not valid UTF-8 is
/// rewritten around the matches. The replacement text is always inserted
/// verbatim; `$` carries no special meaning in it.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: Vec<u8>,
}

impl Substitution {
    pub fn new(old_id: &str, new_id: &str, mode: ReplaceMode) -> Result<Self> {
        if old_id.is_empty() {
            return Err(StageError::EmptyIdentifier);
        }

        let source = match mode {
            ReplaceMode::Literal => regex::escape(old_id),
            ReplaceMode::Pattern => old_id.to_string(),
        };
        let pattern = Regex::new(&source).map_err(|source| StageError::InvalidPattern {
            pattern: old_id.to_string(),
            source,
        })?;

        Ok(Self {
            pattern,
            replacement: new_id.as_bytes().to_vec(),
        })
    }

    /// Replace every match in `content`, returning the new content and match count.
    pub fn apply<'t>(&self, content: &'t [u8]) -> (Cow<'t, [u8]>, usize) {
        let count = self.pattern.find_iter(content).count();
        if count == 0 {
            return (Cow::Borrowed(content), 0);
        }
        let replaced = self
            .pattern
            .replace_all(content, NoExpand(&self.replacement));
        (replaced, count)
    }
}
