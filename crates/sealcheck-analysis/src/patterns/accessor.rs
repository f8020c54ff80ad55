//! Dotted accessor-path patterns with `*` and `**` wildcards.
//!
//! `state.*.items` matches exactly one segment in the middle; `state.**` matches
//! `state` and anything below it. A literal segment may embed `*` as an
//! in-segment wildcard (`on*Change`).

use regex::Regex;
use sealcheck_core::errors::PatternError;

use super::compile_regex;

/// One segment of a compiled accessor pattern.
#[derive(Debug, Clone)]
pub enum Segment {
    /// `**`: zero or more segments.
    AnyDepth,
    /// `*`: exactly one non-empty segment.
    AnyOne,
    /// Anchored regex over one segment.
    Literal(Regex),
}

impl Segment {
    fn parse(segment: &str, pattern: &str) -> Result<Self, PatternError> {
        match segment {
            "" => Err(PatternError::Accessor {
                pattern: pattern.to_string(),
                message: "empty segment".to_string(),
            }),
            "**" => Ok(Self::AnyDepth),
            "*" => Ok(Self::AnyOne),
            literal => {
                let body = regex::escape(literal).replace(r"\*", ".*");
                compile_regex(&format!("^{body}$")).map(Self::Literal)
            }
        }
    }
}

/// A compiled accessor pattern such as `this.state.**`.
#[derive(Debug, Clone)]
pub struct AccessorPattern {
    source: String,
    segments: Vec<Segment>,
}

impl AccessorPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let segments = pattern
            .split('.')
            .map(|segment| Segment::parse(segment, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the whole dotted `text` matches.
    pub fn is_match(&self, text: &str) -> bool {
        let parts: Vec<&str> = text.split('.').collect();
        find_match(&self.segments, &parts, false)
    }
}

/// Match `text` segments against `pattern` segments.
///
/// With `allow_extra`, text left over after the pattern is exhausted still
/// matches. A `**` sets it for everything after it.
pub fn find_match(pattern: &[Segment], text: &[&str], allow_extra: bool) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return text.is_empty() || allow_extra;
    };

    match head {
        Segment::AnyDepth => {
            if text.is_empty() {
                return find_match(rest, text, allow_extra);
            }
            (0..text.len()).any(|offset| find_match(rest, &text[offset..], true))
        }
        Segment::AnyOne => match text.split_first() {
            Some((first, remaining)) if !first.is_empty() => {
                find_match(rest, remaining, allow_extra)
            }
            _ => false,
        },
        Segment::Literal(regex) => match text.split_first() {
            Some((first, remaining)) => {
                regex.is_match(first) && find_match(rest, remaining, allow_extra)
            }
            None => false,
        },
    }
}

/// Any-of set of accessor patterns.
#[derive(Debug, Clone, Default)]
pub struct AccessorPatternSet {
    patterns: Vec<AccessorPattern>,
}

impl AccessorPatternSet {
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self, PatternError> {
        let patterns = sources
            .iter()
            .map(|s| AccessorPattern::compile(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Every text matches some pattern, and there is at least one text.
    pub fn matches_every<S: AsRef<str>>(&self, texts: &[S]) -> bool {
        !texts.is_empty() && texts.iter().all(|t| self.is_match(t.as_ref()))
    }
}
