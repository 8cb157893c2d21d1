// src/manifest/validate.rs

use crate::errors::{GlobspecError, Result};
use crate::manifest::model::{Manifest, RawManifest};

impl TryFrom<RawManifest> for Manifest {
    type Error = GlobspecError;

    fn try_from(raw: RawManifest) -> std::result::Result<Self, Self::Error> {
        validate_raw_manifest(&raw)?;
        Ok(Manifest::new_unchecked(raw.unit))
    }
}

fn validate_raw_manifest(manifest: &RawManifest) -> Result<()> {
    ensure_has_units(manifest)?;
    validate_unit_names(manifest)?;
    validate_bundles(manifest)?;
    Ok(())
}

fn ensure_has_units(manifest: &RawManifest) -> Result<()> {
    if manifest.unit.is_empty() {
        return Err(GlobspecError::Manifest(
            "manifest must contain at least one [unit.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_unit_names(manifest: &RawManifest) -> Result<()> {
    for name in manifest.unit.keys() {
        if name.is_empty() {
            return Err(GlobspecError::Manifest(
                "unit names must not be empty".to_string(),
            ));
        }
        // Names become the `:name` half of an address.
        if name.contains(':') || name.contains('/') {
            return Err(GlobspecError::Manifest(format!(
                "unit name '{}' must not contain ':' or '/'",
                name
            )));
        }
    }
    Ok(())
}

fn validate_bundles(manifest: &RawManifest) -> Result<()> {
    for (name, unit) in manifest.unit.iter() {
        for (idx, bundle) in unit.bundles.iter().enumerate() {
            if bundle.fileset.is_none() {
                return Err(GlobspecError::Manifest(format!(
                    "unit '{}': bundle {} is missing `fileset`",
                    name, idx
                )));
            }
        }
    }
    Ok(())
}
