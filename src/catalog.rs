// src/catalog.rs

//! Per-kind default source selection policy.
//!
//! A flat table keyed by unit kind. Kinds share test-glob constants by value
//! rather than through inheritance, so the policy for any kind can be read
//! off a single row. The table is `'static` data, read-only after process
//! start.

use std::fmt;

use serde::Deserialize;

/// Test-file naming conventions shared across kinds: a library kind excludes
/// the matching convention, the test kind selects it.
pub const JAVA_TEST_GLOBS: &[&str] = &["*Test.java"];
pub const SCALA_TEST_GLOBS: &[&str] = &["*Test.scala", "*Spec.scala"];
pub const PYTHON_TEST_GLOBS: &[&str] = &["test_*.py", "*_test.py"];
/// Language-agnostic test naming patterns for the generic test kind.
pub const TEST_GLOBS: &[&str] = &["test_*.*", "*_test.*", "*Test.*", "*Spec.*"];
/// Build-manifest files, excluded from wildcard-everything kinds.
pub const BUILD_FILE_GLOBS: &[&str] = &["BUILD", "BUILD.*"];

const JUNIT_TEST_GLOBS: &[&str] = &["*Test.java", "*Test.scala", "*Spec.scala"];

/// The kinds the catalog knows about. Unrecognized kind names map to
/// [`UnitKind::Custom`], which carries no default policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Library,
    JavaLibrary,
    ScalaLibrary,
    JunitTests,
    PythonLibrary,
    PythonTests,
    Tests,
    RemoteSources,
    GoPackage,
    GoProtobufLibrary,
    App,
    Custom(String),
}

impl Default for UnitKind {
    fn default() -> Self {
        UnitKind::Library
    }
}

impl From<&str> for UnitKind {
    fn from(s: &str) -> Self {
        match s {
            "library" => UnitKind::Library,
            "java_library" => UnitKind::JavaLibrary,
            "scala_library" => UnitKind::ScalaLibrary,
            "junit_tests" => UnitKind::JunitTests,
            "python_library" => UnitKind::PythonLibrary,
            "python_tests" => UnitKind::PythonTests,
            "test" | "tests" => UnitKind::Tests,
            "remote_sources" => UnitKind::RemoteSources,
            "go" | "go_package" => UnitKind::GoPackage,
            "go_protobuf_library" => UnitKind::GoProtobufLibrary,
            "app" => UnitKind::App,
            other => UnitKind::Custom(other.to_string()),
        }
    }
}

impl UnitKind {
    pub fn as_str(&self) -> &str {
        match self {
            UnitKind::Library => "library",
            UnitKind::JavaLibrary => "java_library",
            UnitKind::ScalaLibrary => "scala_library",
            UnitKind::JunitTests => "junit_tests",
            UnitKind::PythonLibrary => "python_library",
            UnitKind::PythonTests => "python_tests",
            UnitKind::Tests => "tests",
            UnitKind::RemoteSources => "remote_sources",
            UnitKind::GoPackage => "go_package",
            UnitKind::GoProtobufLibrary => "go_protobuf_library",
            UnitKind::App => "app",
            UnitKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UnitKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(UnitKind::from(s.as_str()))
    }
}

/// Default selection for one kind: globs synthesized when no declaration is
/// given, and the excludes layered onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDefaults {
    pub globs: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

/// The policy table. Kinds without a row require explicit declarations.
///
/// `GoPackage` globs on `*` because resources and companion `.c` files live
/// next to the sources; only build manifests are filtered back out.
pub fn source_defaults(kind: &UnitKind) -> Option<SourceDefaults> {
    let defaults = match kind {
        UnitKind::JavaLibrary => SourceDefaults {
            globs: &["*.java"],
            exclude: JAVA_TEST_GLOBS,
        },
        UnitKind::ScalaLibrary => SourceDefaults {
            globs: &["*.scala"],
            exclude: SCALA_TEST_GLOBS,
        },
        UnitKind::JunitTests => SourceDefaults {
            globs: JUNIT_TEST_GLOBS,
            exclude: &[],
        },
        UnitKind::PythonLibrary => SourceDefaults {
            globs: &["*.py"],
            exclude: PYTHON_TEST_GLOBS,
        },
        UnitKind::PythonTests => SourceDefaults {
            globs: PYTHON_TEST_GLOBS,
            exclude: &[],
        },
        UnitKind::Tests => SourceDefaults {
            globs: TEST_GLOBS,
            exclude: &[],
        },
        UnitKind::GoPackage => SourceDefaults {
            globs: &["*"],
            exclude: BUILD_FILE_GLOBS,
        },
        UnitKind::GoProtobufLibrary => SourceDefaults {
            globs: &["*.proto"],
            exclude: &[],
        },
        UnitKind::Library
        | UnitKind::RemoteSources
        | UnitKind::App
        | UnitKind::Custom(_) => return None,
    };
    Some(defaults)
}
