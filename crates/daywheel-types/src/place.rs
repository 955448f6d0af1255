//! Opaque location identity.
//!
//! The engine stores and compares places but never resolves them to
//! geometry; whether a move is geometrically possible is the movement
//! layer's concern. A place is a `(region, local)` pair compared by value.

use serde::{Deserialize, Serialize};

/// An opaque location reference: a region identifier plus an identifier
/// local to that region.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Place {
    /// Identifier of the region containing the location.
    pub region: i32,
    /// Identifier of the location within its region.
    pub local: i32,
}

impl Place {
    /// Create a place from its region and local identifiers.
    pub const fn new(region: i32, local: i32) -> Self {
        Self { region, local }
    }
}

impl core::fmt::Display for Place {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.region, self.local)
    }
}
