// src/spec/dialect.rs

//! Glob dialects and resolved glob specs.

use std::fmt;

use serde::Serialize;

use crate::errors::Result;
use crate::spec::decl::DeclValue;
use crate::spec::filespec::{Filespec, resolve_exclude_globs};
use crate::spec::path_globs::PathGlobs;

/// How raw pattern strings map to glob strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Literal paths; no wildcard expansion semantics attached here.
    Files,
    /// Shallow wildcards: `*` stays within a single directory level.
    Globs,
    /// Recursive wildcards: leading `*` components descend into
    /// subdirectories.
    RGlobs,
    /// zsh-style patterns where `**` is the recursive marker.
    ZGlobs,
}

impl Dialect {
    /// The manifest keyword that selects this dialect.
    pub fn keyword(&self) -> &'static str {
        match self {
            Dialect::Files => "files",
            Dialect::Globs => "globs",
            Dialect::RGlobs => "rglobs",
            Dialect::ZGlobs => "zglobs",
        }
    }

    fn resolve_pattern(&self, pattern: &str) -> String {
        match self {
            // Files/Globs pass through: the shallow/exact distinction is
            // carried by the matcher, where `*` never crosses `/`.
            // ZGlobs pass through: `**` is already the recursive marker.
            Dialect::Files | Dialect::Globs | Dialect::ZGlobs => pattern.to_string(),
            Dialect::RGlobs => rglob_pattern(pattern),
        }
    }
}

/// Rewrite a shallow pattern into its recursive form.
///
/// A component starting with `*` means "at any depth", so it is prefixed with
/// `**/` unless the previous output component already descends. Literal `**`
/// components are never doubled: `rglobs("**/*.java")` stays `**/*.java`.
fn rglob_pattern(pattern: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for component in pattern.split('/') {
        if component == "**" {
            if out.last().is_some_and(|c| c.starts_with("**")) {
                continue;
            }
            out.push(component.to_string());
        } else if component.starts_with('*') {
            if out.last().is_some_and(|c| c.starts_with("**")) {
                out.push(component.to_string());
            } else {
                out.push(format!("**/{component}"));
            }
        } else {
            out.push(component.to_string());
        }
    }
    out.join("/")
}

/// A source declaration resolved against a dialect.
///
/// Included and excluded glob strings are computed once at construction and
/// never recomputed; the instance is immutable from then on. The originating
/// field keeps a copy purely for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobSpec {
    dialect: Dialect,
    patterns: Vec<String>,
    spec_path: String,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl GlobSpec {
    /// Resolve `patterns` through `dialect`, with an optional raw exclude
    /// declaration resolved alongside (see
    /// [`resolve_exclude_globs`](crate::spec::filespec)).
    pub fn new(
        dialect: Dialect,
        patterns: Vec<String>,
        spec_path: &str,
        raw_exclude: Option<&DeclValue>,
    ) -> Result<Self> {
        let include = patterns.iter().map(|p| dialect.resolve_pattern(p)).collect();
        let exclude = resolve_exclude_globs(raw_exclude, spec_path)?;
        Ok(Self {
            dialect,
            patterns,
            spec_path: spec_path.to_string(),
            include,
            exclude,
        })
    }

    /// Exact-file spec over literal paths. Carries no exclude declaration,
    /// so construction cannot fail.
    pub fn files(patterns: Vec<String>, spec_path: &str) -> Self {
        Self {
            dialect: Dialect::Files,
            include: patterns.clone(),
            patterns,
            spec_path: spec_path.to_string(),
            exclude: Vec::new(),
        }
    }

    /// Concatenate further excluded globs after the declaration-level ones.
    /// Used to layer kind-level default excludes onto a synthesized spec.
    pub(crate) fn append_exclude_globs<I>(mut self, globs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exclude.extend(globs.into_iter().map(Into::into));
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn spec_path(&self) -> &str {
        &self.spec_path
    }

    pub fn included_globs(&self) -> &[String] {
        &self.include
    }

    pub fn excluded_globs(&self) -> &[String] {
        &self.exclude
    }

    /// Canonical filespec view: the included globs plus one flattened
    /// exclude group.
    pub fn filespec(&self) -> Filespec {
        Filespec::new(self.include.clone(), self.exclude.clone())
    }

    /// Walk plan rooted at `relpath`.
    pub fn to_path_globs(&self, relpath: &str) -> PathGlobs {
        PathGlobs::create(relpath, &self.include, &self.exclude)
    }
}

impl fmt::Display for GlobSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.patterns.iter().map(|p| format!("\"{p}\"")).collect();
        match self.dialect {
            Dialect::Files => write!(f, "[{}]", quoted.join(", ")),
            _ => write!(f, "{}({})", self.dialect.keyword(), quoted.join(", ")),
        }
    }
}
