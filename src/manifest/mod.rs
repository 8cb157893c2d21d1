// src/manifest/mod.rs

//! Build-manifest loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a manifest file from disk (`loader.rs`).
//! - Validate structural invariants before adaptors are built (`validate.rs`).
//!
//! This is the concrete "raw declaration source" for the resolution layer:
//! it only parses and validates shapes; glob semantics live in [`crate::spec`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_str};
pub use model::{Manifest, RawManifest, RawUnit};
