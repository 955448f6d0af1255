//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Actors are the only entities the engine needs to identify across calls
//! (a follow or flee job carries the ID of the actor it tracks). The wrapper
//! exists to prevent accidental mixing with other UUID-shaped values at
//! compile time. IDs use UUID v7 (time-ordered) so external stores can index
//! them efficiently.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an actor in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ActorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ActorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ActorId> for Uuid {
    fn from(id: ActorId) -> Self {
        id.0
    }
}
