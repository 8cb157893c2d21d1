#![allow(dead_code)]

use globspec::spec::decl::RawGlobSpec;
use globspec::{BundleDecl, DeclValue};

/// Shorthand for a literal string declaration.
pub fn lit(s: &str) -> DeclValue {
    DeclValue::Str(s.to_string())
}

/// Shorthand for a list-of-strings declaration.
pub fn list(items: &[&str]) -> DeclValue {
    DeclValue::List(items.iter().map(|s| lit(s)).collect())
}

/// Shorthand for a declaration value outside the supported shapes.
pub fn int(value: i64) -> DeclValue {
    DeclValue::Other(toml::Value::Integer(value))
}

/// Builder for glob-spec declarations
/// (`{ rglobs = ["**/*.java"], exclude = [["*Test.java"]] }`).
pub struct GlobSpecBuilder {
    raw: RawGlobSpec,
}

impl GlobSpecBuilder {
    pub fn files(patterns: &[&str]) -> Self {
        Self {
            raw: RawGlobSpec {
                files: Some(to_strings(patterns)),
                ..RawGlobSpec::default()
            },
        }
    }

    pub fn globs(patterns: &[&str]) -> Self {
        Self {
            raw: RawGlobSpec {
                globs: Some(to_strings(patterns)),
                ..RawGlobSpec::default()
            },
        }
    }

    pub fn rglobs(patterns: &[&str]) -> Self {
        Self {
            raw: RawGlobSpec {
                rglobs: Some(to_strings(patterns)),
                ..RawGlobSpec::default()
            },
        }
    }

    pub fn zglobs(patterns: &[&str]) -> Self {
        Self {
            raw: RawGlobSpec {
                zglobs: Some(to_strings(patterns)),
                ..RawGlobSpec::default()
            },
        }
    }

    pub fn exclude(mut self, value: DeclValue) -> Self {
        self.raw.exclude = Some(Box::new(value));
        self
    }

    /// Attach an arbitrary boolean option key, recognized or not.
    pub fn option_flag(mut self, key: &str, value: bool) -> Self {
        self.raw.options.insert(key.to_string(), toml::Value::Boolean(value));
        self
    }

    pub fn build(self) -> DeclValue {
        DeclValue::Spec(self.raw)
    }
}

/// Builder for bundle declarations.
pub struct BundleBuilder {
    bundle: BundleDecl,
}

impl BundleBuilder {
    pub fn new(fileset: DeclValue) -> Self {
        Self {
            bundle: BundleDecl {
                fileset: Some(fileset),
                rel_path: None,
            },
        }
    }

    pub fn rel_path(mut self, path: &str) -> Self {
        self.bundle.rel_path = Some(path.to_string());
        self
    }

    pub fn build(self) -> BundleDecl {
        self.bundle
    }
}

fn to_strings(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|s| s.to_string()).collect()
}
