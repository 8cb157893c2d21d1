// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::Address;

/// Errors raised while resolving source declarations into fields.
///
/// All resolution errors are deterministic functions of their input:
/// retrying an identical declaration reproduces the identical error.
#[derive(Error, Debug)]
pub enum GlobspecError {
    #[error("expected either a glob or list of literal sources: got {value}")]
    InvalidDeclaration { value: String },

    #[error("excludes must be a list of patterns or glob specs: got {value}")]
    UnsupportedExcludeType { value: String },

    #[error("nested excludes are not supported: got {value}")]
    NestedExcludeNotSupported { value: String },

    #[error("unsupported glob options: {keys:?}")]
    UnsupportedGlobOption { keys: Vec<String> },

    #[error("cannot exclude a value of this type: got {value}")]
    UnsupportedGlobValueType { value: String },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Context wrapper added by the field entry points, so a failure always
    /// names the unit and argument it came from.
    #[error("resolving `{arg}` for {address}: {source}")]
    Resolve {
        address: Address,
        arg: String,
        #[source]
        source: Box<GlobspecError>,
    },

    #[error("manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GlobspecError>;
