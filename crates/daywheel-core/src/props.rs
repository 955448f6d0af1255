//! Typed tag store: props and prop sets.
//!
//! A [`Prop`] is a `kind:name` tag and a [`PropSet`] maps props to integer
//! values. The behavior layer uses prop sets as admission conditions --
//! "may this actor traverse that edge, keep that activity" -- by checking
//! stored values against minimum thresholds.
//!
//! # Absence is zero
//!
//! The set never stores a zero: `set(p, 0)` removes the entry and `get` on
//! an absent key returns 0. Every admission check is written as
//! `get(p) > 0` or `get(p) >= threshold`, so the encoding is load-bearing;
//! a store that kept explicit zeros would change `len` and enumeration even
//! though `get` results look identical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Prop
// ---------------------------------------------------------------------------

/// Error returned by the strict prop parser.
#[derive(Debug, thiserror::Error)]
pub enum PropParseError {
    /// The input is not of the form `kind:name` with both sides non-empty.
    #[error("malformed prop (expected `kind:name`): {input:?}")]
    Malformed {
        /// The rejected input string.
        input: String,
    },
}

/// An immutable `(kind, name)` tag, compared by value.
///
/// A prop with an empty kind or name is *invalid*: representable (it is the
/// parse-failure sentinel) but never stored in a [`PropSet`].
#[derive(
    Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Prop {
    /// Category half of the tag.
    kind: String,
    /// Name half of the tag.
    name: String,
}

impl Prop {
    /// Create a prop from its kind and name.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// The invalid sentinel returned by [`Prop::parse`] on malformed input.
    pub const fn invalid() -> Self {
        Self {
            kind: String::new(),
            name: String::new(),
        }
    }

    /// Parse a `kind:name` string, splitting on the **first** colon and
    /// trimming both sides.
    ///
    /// Never fails: inputs without a colon, or with an empty side after
    /// trimming, produce the invalid sentinel.
    pub fn parse(input: &str) -> Self {
        match input.split_once(':') {
            Some((kind, name)) => {
                let kind = kind.trim();
                let name = name.trim();
                if kind.is_empty() || name.is_empty() {
                    Self::invalid()
                } else {
                    Self::new(kind, name)
                }
            }
            None => Self::invalid(),
        }
    }

    /// Strict variant of [`Prop::parse`] for call sites that must not
    /// tolerate malformed tags.
    ///
    /// # Errors
    ///
    /// Returns [`PropParseError::Malformed`] where `parse` would return the
    /// invalid sentinel.
    pub fn parse_strict(input: &str) -> Result<Self, PropParseError> {
        let prop = Self::parse(input);
        if prop.is_valid() {
            Ok(prop)
        } else {
            Err(PropParseError::Malformed {
                input: input.to_owned(),
            })
        }
    }

    /// Category half of the tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Name half of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both halves of the tag are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.kind.is_empty() && !self.name.is_empty()
    }

    /// The canonical `kind:name` rendering of the tag.
    pub fn full_name(&self) -> String {
        format!("{}:{}", self.kind, self.name)
    }
}

impl core::fmt::Display for Prop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

// ---------------------------------------------------------------------------
// PropSet
// ---------------------------------------------------------------------------

/// A mapping from [`Prop`] to integer value with the absence-is-zero
/// encoding described in the module docs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropSet {
    /// Stored entries; no key ever maps to 0.
    entries: BTreeMap<Prop, i64>,
}

impl PropSet {
    /// Create an empty prop set.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Return the value for a prop, or 0 when absent.
    pub fn get(&self, prop: &Prop) -> i64 {
        self.entries.get(prop).copied().unwrap_or(0)
    }

    /// Set the value for a prop.
    ///
    /// Setting 0 removes the entry; storing an invalid prop is a silent
    /// no-op.
    pub fn set(&mut self, prop: Prop, value: i64) {
        if !prop.is_valid() {
            return;
        }
        if value == 0 {
            self.entries.remove(&prop);
        } else {
            self.entries.insert(prop, value);
        }
    }

    /// Add a signed delta to a prop's value (saturating).
    ///
    /// Equivalent to `set(prop, get(prop) + delta)`, so a delta that brings
    /// the value to 0 removes the entry.
    pub fn add(&mut self, prop: Prop, delta: i64) {
        let current = self.get(&prop);
        self.set(prop, current.saturating_add(delta));
    }

    /// Remove a prop unconditionally. Returns whether an entry existed.
    pub fn remove(&mut self, prop: &Prop) -> bool {
        self.entries.remove(prop).is_some()
    }

    /// Whether every requirement is met: for each `(prop, min)` pair the
    /// stored value (0 when absent) is at least `min`.
    ///
    /// Empty requirements are trivially satisfied.
    pub fn meets_conditions(&self, requirements: &BTreeMap<Prop, i64>) -> bool {
        requirements
            .iter()
            .all(|(prop, min)| self.get(prop) >= *min)
    }

    /// Add (not overwrite) every entry of another set into this one.
    pub fn merge(&mut self, other: &Self) {
        for (prop, value) in &other.entries {
            self.add(prop.clone(), *value);
        }
    }

    /// Number of stored entries (zeros are never stored).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set stores no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored `(prop, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Prop, i64)> {
        self.entries.iter().map(|(prop, value)| (prop, *value))
    }
}
