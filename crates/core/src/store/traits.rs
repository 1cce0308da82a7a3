//! Entity trait
//!
//! Implemented by every record kind the generic [`super::EntityStore`] can own.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::EntityKind;

/// A uniquely identified record with a status lifecycle
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Which collection this entity belongs to (used in errors and logs)
    const KIND: EntityKind;

    /// Parsed form of a named filter predicate
    type Filter: Clone + std::fmt::Debug;

    /// A requested state change
    type Transition: std::fmt::Debug;

    /// Unique key within the store
    fn id(&self) -> &str;

    /// Current lifecycle state, for logging
    fn state(&self) -> String;

    /// Parse a filter name; unknown names fail with `InvalidFilter`
    fn parse_filter(name: &str) -> Result<Self::Filter>;

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Validate `request` against the current state and build the updated copy.
    ///
    /// Returns `Ok(None)` when the request is a harmless no-op.
    /// Never mutates `self`.
    fn apply(&self, request: &Self::Transition, now: NaiveDateTime) -> Result<Option<Self>>;
}
