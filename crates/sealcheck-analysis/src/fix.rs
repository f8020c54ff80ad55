//! Regex-driven fix synthesis over rendered type text.
//!
//! Each rule is compiled anchored at both ends, so a rule only applies when it
//! matches the whole type text. Rules are tried in configured order and the
//! first match wins.

use regex::Regex;
use serde::Serialize;

use sealcheck_core::config::{FixRuleEntry, FixerSpec};
use sealcheck_core::errors::{ConfigError, PatternError};

use crate::syntax::Span;

/// A text replacement for one span of the unit's source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub span: Span,
    pub replacement: String,
}

/// A compiled `{ pattern, replace }` pair.
#[derive(Debug, Clone)]
pub struct FixRule {
    regex: Regex,
    source: String,
    template: String,
}

impl FixRule {
    pub fn compile(entry: &FixRuleEntry) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("(?s)^(?:{})$", entry.pattern)).map_err(|e| {
            PatternError::Regex {
                pattern: entry.pattern.clone(),
                message: e.to_string(),
            }
        })?;
        let template = normalize_template(&entry.replace, &regex);
        Ok(Self {
            regex,
            source: entry.pattern.clone(),
            template,
        })
    }

    /// The pattern as configured.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The replacement template in `regex` expansion syntax.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Rewrite `text` if the rule matches all of it.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let mut out = String::with_capacity(text.len() + self.template.len());
        caps.expand(&self.template, &mut out);
        Some(out)
    }
}

/// Whether and how a rule fixes violations.
#[derive(Debug, Clone, Default)]
pub enum FixConfig {
    #[default]
    Disabled,
    Rules(Vec<FixRule>),
}

impl FixConfig {
    pub fn compile(spec: Option<&FixerSpec>, field: &str) -> Result<Self, ConfigError> {
        match spec.and_then(FixerSpec::rules) {
            None => Ok(Self::Disabled),
            Some(entries) => compile_rules(entries, field).map(Self::Rules),
        }
    }

    /// Replacement text from the first matching rule.
    pub fn synthesize(&self, text: &str) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Rules(rules) => rules.iter().find_map(|rule| rule.apply(text)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Rules(_))
    }
}

/// Compile an ordered list of fix rules, naming the failing entry on error.
pub fn compile_rules(entries: &[FixRuleEntry], field: &str) -> Result<Vec<FixRule>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            FixRule::compile(entry).map_err(|e| ConfigError::pattern(format!("{field}[{i}]"), e))
        })
        .collect()
}

/// One replacement per matching rule, in rule order.
pub fn suggest(rules: &[FixRule], text: &str) -> Vec<String> {
    rules.iter().filter_map(|rule| rule.apply(text)).collect()
}

/// Rewrite a `String.prototype.replace` style template into `regex` expansion
/// syntax.
///
/// `$1`, `$12`, `$<name>`, `$&` and `$$` are translated. `` $` `` and `$'`
/// expand to nothing because rules always match the whole text. A `$` that
/// starts no valid reference is kept literally, as is `$<name>` when the regex
/// has no named groups. An unknown name in a regex with named groups expands
/// to nothing.
pub fn normalize_template(template: &str, regex: &Regex) -> String {
    let group_count = regex.captures_len().saturating_sub(1);
    let has_named_groups = regex.capture_names().flatten().next().is_some();
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '$' {
            out.push(c);
            i += 1;
            continue;
        }

        match chars.get(i + 1).copied() {
            Some('$') => {
                out.push_str("$$");
                i += 2;
            }
            Some('&') => {
                out.push_str("${0}");
                i += 2;
            }
            Some('`') | Some('\'') => i += 2,
            Some('<') => {
                let close = chars[i + 2..].iter().position(|c| *c == '>');
                match close.filter(|_| has_named_groups) {
                    Some(len) => {
                        let name: String = chars[i + 2..i + 2 + len].iter().collect();
                        if regex.capture_names().flatten().any(|n| n == name) {
                            out.push_str(&format!("${{{name}}}"));
                        }
                        i += len + 3;
                    }
                    None => {
                        out.push_str("$$<");
                        i += 2;
                    }
                }
            }
            Some(d) if d.is_ascii_digit() => {
                let first = digit(d);
                let two = chars
                    .get(i + 2)
                    .filter(|c| c.is_ascii_digit())
                    .map(|c| first * 10 + digit(*c))
                    .filter(|n| (1..=group_count).contains(n));
                match two {
                    Some(n) => {
                        out.push_str(&format!("${{{n}}}"));
                        i += 3;
                    }
                    None if (1..=group_count).contains(&first) => {
                        out.push_str(&format!("${{{first}}}"));
                        i += 2;
                    }
                    None => {
                        out.push_str("$$");
                        i += 1;
                    }
                }
            }
            _ => {
                out.push_str("$$");
                i += 1;
            }
        }
    }
    out
}

fn digit(c: char) -> usize {
    c.to_digit(10).map(|d| d as usize).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, replace: &str) -> FixRule {
        FixRule::compile(&FixRuleEntry::new(pattern, replace)).unwrap()
    }

    #[test]
    fn test_first_full_match_wins() {
        let config = FixConfig::Rules(vec![
            rule("^Readonly<(.+)>$", "$1"),
            rule("^(.+)$", "Readonly<$1>"),
        ]);
        assert_eq!(config.synthesize("Readonly<Foo>").as_deref(), Some("Foo"));
        assert_eq!(config.synthesize("Foo").as_deref(), Some("Readonly<Foo>"));
    }

    #[test]
    fn test_partial_match_does_not_apply() {
        let r = rule("Array<(.+)>", "ReadonlyArray<$1>");
        assert_eq!(r.apply("Array<string> | null"), None);
        assert_eq!(r.apply("Array<string>").as_deref(), Some("ReadonlyArray<string>"));
    }

    #[test]
    fn test_default_collection_fixer() {
        let r = rule("^(Array|Map|Set)<(.+)>$", "Readonly$1<$2>");
        assert_eq!(r.apply("Map<string, number>").as_deref(), Some("ReadonlyMap<string, number>"));
    }

    #[test]
    fn test_disabled_never_fixes() {
        assert_eq!(FixConfig::Disabled.synthesize("Foo"), None);
        let config = FixConfig::compile(Some(&FixerSpec::Flag(false)), "f").unwrap();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_template_forms() {
        let r = rule("(?<head>[A-Z])(\\w*)", "$<head>-$2-$&-$$-$9");
        assert_eq!(r.apply("Foo").as_deref(), Some("F-oo-Foo-$-$9"));
    }

    #[test]
    fn test_named_reference_without_named_groups_is_literal() {
        let r = rule("(\\w+)", "$<head>:$1");
        assert_eq!(r.apply("Foo").as_deref(), Some("$<head>:Foo"));
        let unclosed = rule("(?<head>\\w+)", "$<head");
        assert_eq!(unclosed.apply("Foo").as_deref(), Some("$<head"));
    }

    #[test]
    fn test_unknown_name_with_named_groups_is_empty() {
        let r = rule("(?<head>\\w+)", "[$<tail>]$<head>");
        assert_eq!(r.apply("Foo").as_deref(), Some("[]Foo"));
    }

    #[test]
    fn test_two_digit_reference_falls_back_to_one() {
        let r = rule("(a)", "$10");
        assert_eq!(r.apply("a").as_deref(), Some("a0"));
    }

    #[test]
    fn test_suggestions_collect_every_match() {
        let rules = vec![
            rule("^(.+)$", "Readonly<$1>"),
            rule("^Nope$", "x"),
            rule("^(.+)$", "ReadonlyDeep<$1>"),
        ];
        assert_eq!(suggest(&rules, "Foo"), vec!["Readonly<Foo>", "ReadonlyDeep<Foo>"]);
    }

    #[test]
    fn test_invalid_fix_pattern_names_field() {
        let err = compile_rules(&[FixRuleEntry::new("(", "$1")], "rules[0].fixer").unwrap_err();
        match err {
            ConfigError::InvalidPattern { field, source } => {
                assert_eq!(field, "rules[0].fixer[0]");
                assert_eq!(source.pattern(), "(");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
