//! Compiled type specifiers.

use glob::Pattern;
use regex::Regex;

use sealcheck_core::errors::{ConfigError, PatternError};
use sealcheck_core::types::{DeclarationOrigin, TypeSpecifier};

use crate::patterns::compile_regex;

/// A [`TypeSpecifier`] with its glob and regexes compiled.
#[derive(Debug, Clone)]
pub struct CompiledSpecifier {
    /// `None` for a bare name, which matches any origin.
    pub origin: Option<DeclarationOrigin>,
    pub package: Option<String>,
    pub path: Option<Pattern>,
    pub names: Vec<String>,
    pub patterns: Vec<Regex>,
}

impl CompiledSpecifier {
    pub fn compile(spec: &TypeSpecifier, field: &str) -> Result<Self, ConfigError> {
        let decl = match spec {
            TypeSpecifier::Name(name) => {
                return Ok(Self {
                    origin: None,
                    package: None,
                    path: None,
                    names: vec![name.clone()],
                    patterns: Vec::new(),
                })
            }
            TypeSpecifier::Declaration(decl) => decl,
        };

        if decl.from == DeclarationOrigin::Package && decl.package.is_none() {
            return Err(ConfigError::ValidationFailed {
                field: format!("{field}.package"),
                message: "a package specifier needs `package`".to_string(),
            });
        }

        let path = decl
            .path
            .as_deref()
            .map(|glob| {
                Pattern::new(glob).map_err(|e| {
                    ConfigError::pattern(
                        format!("{field}.path"),
                        PatternError::Glob {
                            pattern: glob.to_string(),
                            message: e.to_string(),
                        },
                    )
                })
            })
            .transpose()?;

        let patterns = decl
            .pattern
            .as_ref()
            .map(|p| p.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|p| compile_regex(p).map_err(|e| ConfigError::pattern(format!("{field}.pattern"), e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            origin: Some(decl.from),
            package: decl.package.clone(),
            path,
            names: decl
                .name
                .as_ref()
                .map(|n| n.as_slice().to_vec())
                .unwrap_or_default(),
            patterns,
        })
    }

    /// Name filter: listed names or patterns, or anything if neither is given.
    pub fn selects_name(&self, name: &str) -> bool {
        if self.names.is_empty() && self.patterns.is_empty() {
            return true;
        }
        self.names.iter().any(|n| n == name) || self.patterns.iter().any(|p| p.is_match(name))
    }
}
