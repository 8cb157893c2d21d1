// src/lib.rs

//! Declarative source-spec resolution for an incremental build graph.
//!
//! `globspec` turns per-unit file-selection declarations (literal paths or
//! glob specs with optional excludes) into canonical filespecs and
//! filesystem-walk plans, applies per-kind default selection policy, and
//! packages the results into graph-node fields whose identity is scoped to
//! (address, argument name) for stable caching.
//!
//! The resolution layer is pure and synchronous: no I/O, no shared mutable
//! state, safe to call from any number of workers concurrently. The [`walk`]
//! module is the reference executor for the plans it produces.

pub mod adaptor;
pub mod catalog;
pub mod errors;
pub mod fields;
pub mod fs;
pub mod manifest;
pub mod spec;
pub mod types;
pub mod walk;

pub use adaptor::UnitAdaptor;
pub use catalog::{SourceDefaults, UnitKind, source_defaults};
pub use errors::{GlobspecError, Result};
pub use fields::{
    BundleDecl, BundlesField, Field, FieldId, SourcesField, resolve_bundle_field, resolve_field,
};
pub use spec::{
    DeclValue, Dialect, ExcludeSpec, Filespec, GlobSpec, PathGlobs, RawGlobSpec, SourceDecl,
    normalize, normalize_value,
};
pub use types::Address;
