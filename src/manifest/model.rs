// src/manifest/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::adaptor::UnitAdaptor;
use crate::catalog::UnitKind;
use crate::fields::BundleDecl;
use crate::spec::decl::DeclValue;
use crate::types::Address;

/// Top-level build manifest as read from a TOML file, before validation.
///
/// ```toml
/// [unit.lib]
/// kind = "java_library"
/// sources = { rglobs = ["**/*.java"], exclude = [["*Test.java"]] }
///
/// [unit.assets]
/// kind = "app"
///
/// [[unit.assets.bundles]]
/// fileset = ["config/*.yml"]
/// rel_path = "dist"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawManifest {
    /// All build units from `[unit.<name>]`, keyed by unit name.
    #[serde(default)]
    pub unit: BTreeMap<String, RawUnit>,
}

/// `[unit.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUnit {
    /// Unit kind; decides the default source selection policy.
    #[serde(default)]
    pub kind: UnitKind,

    /// Source selection: a literal path, a list of paths, or a glob spec.
    /// Left untyped here; the resolution layer classifies the shape.
    #[serde(default)]
    pub sources: Option<DeclValue>,

    /// Companion resource selection; never defaulted.
    #[serde(default)]
    pub resources: Option<DeclValue>,

    /// Independent filesets, each with an optional root override.
    #[serde(default)]
    pub bundles: Vec<BundleDecl>,
}

/// A validated manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    units: BTreeMap<String, RawUnit>,
}

impl Manifest {
    pub(crate) fn new_unchecked(units: BTreeMap<String, RawUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> impl Iterator<Item = (&str, &RawUnit)> {
        self.units.iter().map(|(name, unit)| (name.as_str(), unit))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Build one adaptor per unit, addressed under `spec_path` (the manifest
    /// directory relative to the build root).
    pub fn into_adaptors(self, spec_path: &str) -> Vec<UnitAdaptor> {
        self.units
            .into_iter()
            .map(|(name, unit)| {
                let mut adaptor = UnitAdaptor::new(Address::new(spec_path, name), unit.kind);
                if let Some(sources) = unit.sources {
                    adaptor = adaptor.with_arg("sources", sources);
                }
                if let Some(resources) = unit.resources {
                    adaptor = adaptor.with_arg("resources", resources);
                }
                adaptor.with_bundles(unit.bundles)
            })
            .collect()
    }
}
