// src/fields/id.rs

use std::fmt;

use crate::types::Address;

/// Identity key for field caching: a field is identified by the owning
/// unit's address and the argument name, never by its computed globs.
///
/// Within one graph evaluation the computation is deterministic per key, so
/// the narrow key is sufficient, and it keeps memoization stable when the
/// derived data is large. Use this type for map/set membership instead of
/// structural equality over whole field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub address: Address,
    pub arg: String,
}

impl FieldId {
    pub fn new(address: Address, arg: impl Into<String>) -> Self {
        Self {
            address,
            arg: arg.into(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.address, self.arg)
    }
}
