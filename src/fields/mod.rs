// src/fields/mod.rs

//! Graph-node fields carrying resolved selections.
//!
//! - [`id`] defines the narrow identity key used for field caching.
//! - [`sources`] holds the scalar sources field and its entry point.
//! - [`bundles`] holds the aggregate bundle field and its entry point.

pub mod bundles;
pub mod id;
pub mod sources;

pub use bundles::{BundleDecl, BundlesField, resolve_bundle_field};
pub use id::FieldId;
pub use sources::{SourcesField, resolve_field};

/// Any field the adaptor can attach to a graph node.
#[derive(Debug, Clone)]
pub enum Field {
    Sources(SourcesField),
    Bundles(BundlesField),
}
