// src/spec/decl.rs

//! Raw declaration values and the normalization boundary.
//!
//! A build unit's source-selection argument arrives as an untyped value:
//! a single path, a list of paths, or a glob-spec table like
//! `{ rglobs = ["**/*.java"], exclude = [["*Test.java"]] }`. Shape dispatch
//! happens exactly once, in [`SourceDecl::from_value`]; everything downstream
//! matches on the resulting tagged union.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::errors::{GlobspecError, Result};
use crate::spec::dialect::{Dialect, GlobSpec};

/// An untyped source-selection value as handed over by the manifest parser.
///
/// `Other` captures any shape outside the supported forms so it can be named
/// in the resulting error instead of failing opaquely at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeclValue {
    Str(String),
    List(Vec<DeclValue>),
    Spec(RawGlobSpec),
    Other(toml::Value),
}

impl DeclValue {
    /// Short rendering for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            DeclValue::Str(s) => format!("\"{s}\""),
            DeclValue::List(items) => {
                let inner: Vec<String> = items.iter().map(|i| i.describe()).collect();
                format!("[{}]", inner.join(", "))
            }
            DeclValue::Spec(raw) => raw.describe(),
            DeclValue::Other(value) => value.to_string(),
        }
    }
}

/// A glob-spec table before validation: exactly one dialect key, an optional
/// exclude declaration, and any unrecognized option keys kept aside for the
/// validation step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawGlobSpec {
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub globs: Option<Vec<String>>,
    #[serde(default)]
    pub rglobs: Option<Vec<String>>,
    #[serde(default)]
    pub zglobs: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Box<DeclValue>>,
    #[serde(flatten)]
    pub options: BTreeMap<String, toml::Value>,
}

impl RawGlobSpec {
    fn describe(&self) -> String {
        let mut keys: Vec<&str> = Vec::new();
        if self.files.is_some() {
            keys.push("files");
        }
        if self.globs.is_some() {
            keys.push("globs");
        }
        if self.rglobs.is_some() {
            keys.push("rglobs");
        }
        if self.zglobs.is_some() {
            keys.push("zglobs");
        }
        for key in self.options.keys() {
            keys.push(key);
        }
        if keys.is_empty() {
            return "{ }".to_string();
        }
        format!("{{ {} = [..] }}", keys.join(" = [..], "))
    }

    /// Validate option keys and resolve the table into a [`GlobSpec`].
    ///
    /// The legacy `follow_links` key is accepted and ignored for the
    /// transition period; links are always followed. Any other unrecognized
    /// key is fatal.
    pub(crate) fn into_spec(self, spec_path: &str) -> Result<GlobSpec> {
        let mut keys: Vec<String> = self.options.keys().cloned().collect();
        if let Some(pos) = keys.iter().position(|k| k == "follow_links") {
            keys.remove(pos);
            warn!(
                spec_path = %spec_path,
                "ignoring legacy `follow_links` option on glob; links are always followed"
            );
        }
        if !keys.is_empty() {
            return Err(GlobspecError::UnsupportedGlobOption { keys });
        }

        let description = self.describe();
        let mut present: Vec<(Dialect, Vec<String>)> = Vec::new();
        if let Some(patterns) = self.files {
            present.push((Dialect::Files, patterns));
        }
        if let Some(patterns) = self.globs {
            present.push((Dialect::Globs, patterns));
        }
        if let Some(patterns) = self.rglobs {
            present.push((Dialect::RGlobs, patterns));
        }
        if let Some(patterns) = self.zglobs {
            present.push((Dialect::ZGlobs, patterns));
        }

        if present.len() != 1 {
            return Err(GlobspecError::InvalidDeclaration {
                value: format!(
                    "glob spec must name exactly one of files/globs/rglobs/zglobs: got {}",
                    description
                ),
            });
        }
        let (dialect, patterns) = present.remove(0);

        GlobSpec::new(dialect, patterns, spec_path, self.exclude.as_deref())
    }
}

/// The supported declaration shapes, decided once at the normalization
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceDecl {
    /// No declaration was provided.
    Absent,
    /// A single literal path.
    Literal(String),
    /// A homogeneous collection of literal paths, order preserved.
    Collection(Vec<String>),
    /// An already-resolved glob spec, passed through unchanged.
    Resolved(GlobSpec),
}

impl SourceDecl {
    /// Classify a raw value. Any shape outside the supported forms fails with
    /// an error naming the offending value.
    pub fn from_value(value: Option<&DeclValue>, spec_path: &str) -> Result<Self> {
        match value {
            None => Ok(SourceDecl::Absent),
            Some(DeclValue::Str(s)) => Ok(SourceDecl::Literal(s.clone())),
            Some(list @ DeclValue::List(items)) => {
                let mut patterns = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        DeclValue::Str(s) => patterns.push(s.clone()),
                        _ => {
                            return Err(GlobspecError::InvalidDeclaration {
                                value: list.describe(),
                            });
                        }
                    }
                }
                Ok(SourceDecl::Collection(patterns))
            }
            Some(DeclValue::Spec(raw)) => Ok(SourceDecl::Resolved(raw.clone().into_spec(spec_path)?)),
            Some(other @ DeclValue::Other(_)) => Err(GlobspecError::InvalidDeclaration {
                value: other.describe(),
            }),
        }
    }
}

/// Map a classified declaration onto its glob dialect.
///
/// Literal shapes become exact-file specs; an already-resolved spec is
/// returned unchanged, which makes normalization idempotent.
pub fn normalize(decl: SourceDecl, spec_path: &str) -> GlobSpec {
    match decl {
        SourceDecl::Absent => GlobSpec::files(Vec::new(), spec_path),
        SourceDecl::Literal(path) => GlobSpec::files(vec![path], spec_path),
        SourceDecl::Collection(paths) => GlobSpec::files(paths, spec_path),
        SourceDecl::Resolved(spec) => spec,
    }
}

/// Classify and normalize in one step.
pub fn normalize_value(value: Option<&DeclValue>, spec_path: &str) -> Result<GlobSpec> {
    Ok(normalize(SourceDecl::from_value(value, spec_path)?, spec_path))
}
