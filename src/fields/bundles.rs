// src/fields/bundles.rs

//! The aggregate bundles field for units that declare multiple filesets.

use std::hash::{Hash, Hasher};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{GlobspecError, Result};
use crate::spec::decl::{DeclValue, normalize_value};
use crate::spec::filespec::Filespec;
use crate::spec::path_globs::PathGlobs;
use crate::types::Address;

/// One declared bundle: a fileset with an optional root-path override.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BundleDecl {
    /// The bundle's file selection; same shapes as a `sources` declaration.
    #[serde(default)]
    pub fileset: Option<DeclValue>,
    /// Overrides the owning unit's directory as the glob root.
    #[serde(default)]
    pub rel_path: Option<String>,
}

/// All bundles of one unit, resolved. The three vectors are parallel and
/// preserve bundle declaration order. Identity is the owning address alone:
/// all bundles of a unit are one cache entry.
#[derive(Debug, Clone)]
pub struct BundlesField {
    address: Address,
    bundles: Vec<BundleDecl>,
    filespecs: Vec<Filespec>,
    path_globs_list: Vec<PathGlobs>,
}

impl BundlesField {
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn bundles(&self) -> &[BundleDecl] {
        &self.bundles
    }

    pub fn filespecs(&self) -> &[Filespec] {
        &self.filespecs
    }

    pub fn path_globs_list(&self) -> &[PathGlobs] {
        &self.path_globs_list
    }
}

impl PartialEq for BundlesField {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for BundlesField {}

impl Hash for BundlesField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

/// Resolve a unit's bundle declarations into one aggregate field.
///
/// Each bundle's globs are rooted at its own `rel_path` override when
/// present, otherwise at the unit's directory. A unit without bundles
/// produces no field.
pub fn resolve_bundle_field(
    address: &Address,
    bundles: &[BundleDecl],
    unit_base_dir: &str,
) -> Result<Option<BundlesField>> {
    if bundles.is_empty() {
        return Ok(None);
    }

    let mut filespecs = Vec::with_capacity(bundles.len());
    let mut path_globs_list = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        let rel_root = bundle.rel_path.as_deref().unwrap_or(unit_base_dir);
        let spec = normalize_value(bundle.fileset.as_ref(), rel_root).map_err(|source| {
            GlobspecError::Resolve {
                address: address.clone(),
                arg: "bundles".to_string(),
                source: Box::new(source),
            }
        })?;
        filespecs.push(spec.filespec());
        path_globs_list.push(spec.to_path_globs(rel_root));
    }
    debug!(address = %address, bundles = bundles.len(), "resolved bundles field");

    Ok(Some(BundlesField {
        address: address.clone(),
        bundles: bundles.to_vec(),
        filespecs,
        path_globs_list,
    }))
}
