// src/manifest/loader.rs

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::manifest::model::{Manifest, RawManifest};

/// Load a manifest from a given path and return the raw `RawManifest`.
///
/// This only performs TOML deserialization; it does **not** perform
/// structural validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawManifest> {
    let contents = fs::read_to_string(path.as_ref())?;
    let manifest: RawManifest = toml::from_str(&contents)?;
    Ok(manifest)
}

/// Parse and validate a manifest from TOML text.
pub fn load_from_str(contents: &str) -> Result<Manifest> {
    let raw: RawManifest = toml::from_str(contents)?;
    Manifest::try_from(raw)
}

/// Load a manifest from path and run structural validation.
///
/// This is the recommended entry point: downstream code can hand the
/// resulting [`Manifest`] to [`Manifest::into_adaptors`] and resolve fields
/// without re-checking shapes.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Manifest> {
    let raw = load_from_path(&path)?;
    Manifest::try_from(raw)
}
