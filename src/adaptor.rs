// src/adaptor.rs

//! Per-unit facade that turns raw declarations into graph-node fields.

use std::collections::BTreeMap;

use crate::catalog::{UnitKind, source_defaults};
use crate::errors::Result;
use crate::fields::{BundleDecl, Field, resolve_bundle_field, resolve_field};
use crate::spec::decl::DeclValue;
use crate::types::Address;

/// The adaptor for one build unit: its address, kind, and the raw keyword
/// arguments from the manifest.
///
/// One adaptor exists per unit, constructed when the unit's declaration is
/// parsed and immutable thereafter. It is the sole producer of the unit's
/// fields.
#[derive(Debug, Clone)]
pub struct UnitAdaptor {
    address: Address,
    kind: UnitKind,
    args: BTreeMap<String, DeclValue>,
    bundles: Vec<BundleDecl>,
}

impl UnitAdaptor {
    pub fn new(address: Address, kind: UnitKind) -> Self {
        Self {
            address,
            kind,
            args: BTreeMap::new(),
            bundles: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: DeclValue) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn with_bundles(mut self, bundles: Vec<BundleDecl>) -> Self {
        self.bundles = bundles;
        self
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    pub fn arg(&self, name: &str) -> Option<&DeclValue> {
        self.args.get(name)
    }

    pub fn bundles(&self) -> &[BundleDecl] {
        &self.bundles
    }

    /// Default globs synthesized when the unit declares no `sources`.
    pub fn default_sources_globs(&self) -> Option<&'static [&'static str]> {
        source_defaults(&self.kind).map(|d| d.globs)
    }

    /// Excludes layered onto the default globs.
    pub fn default_sources_exclude_globs(&self) -> Option<&'static [&'static str]> {
        source_defaults(&self.kind).map(|d| d.exclude)
    }

    /// Resolve every field the graph engine attaches to this unit's node:
    /// `sources` (subject to the kind's default policy), `resources`
    /// (explicit only, never defaulted), and the aggregate bundles field.
    pub fn fields(&self) -> Result<Vec<Field>> {
        let base_dir = self.address.spec_path.as_str();
        let mut fields = Vec::new();

        if let Some(field) = resolve_field(
            &self.address,
            "sources",
            self.args.get("sources"),
            None,
            base_dir,
            self.default_sources_globs(),
            self.default_sources_exclude_globs(),
        )? {
            fields.push(Field::Sources(field));
        }

        if let Some(field) = resolve_field(
            &self.address,
            "resources",
            self.args.get("resources"),
            None,
            base_dir,
            None,
            None,
        )? {
            fields.push(Field::Sources(field));
        }

        if let Some(field) = resolve_bundle_field(&self.address, &self.bundles, base_dir)? {
            fields.push(Field::Bundles(field));
        }

        Ok(fields)
    }
}
