//! Unanchored regex sets matched against identifier texts.

use regex::Regex;
use sealcheck_core::errors::PatternError;

use super::compile_regex;

/// An ordered set of regexes. A text matches the set if any regex matches it.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self, PatternError> {
        let patterns = sources
            .iter()
            .map(|s| compile_regex(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Any text matches.
    pub fn matches_any<S: AsRef<str>>(&self, texts: &[S]) -> bool {
        texts.iter().any(|t| self.is_match(t.as_ref()))
    }

    /// Every text matches, and there is at least one.
    pub fn matches_every<S: AsRef<str>>(&self, texts: &[S]) -> bool {
        !texts.is_empty() && texts.iter().all(|t| self.is_match(t.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
