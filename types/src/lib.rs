//! Core domain types for Kickoff.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod deck;
mod input;
mod scroll;
pub mod ui;

pub use deck::{Card, Collaborator, Deck, DeckError, Section, TeamMember};
pub use input::{InputEvent, InputKind, Key, ListenerId, ListenerKind, ListenerTarget};
pub use scroll::{Overflow, ScrollBehavior, ScrollBlock, ScrollIntoView, ScrollScope};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Section identifiers
// ============================================================================

/// Stable identifier of one navigable section (the anchor id of the section).
///
/// Guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("section id must not be empty")]
pub struct EmptySectionIdError;

impl SectionId {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptySectionIdError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptySectionIdError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionId {
    type Error = EmptySectionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SectionId {
    type Error = EmptySectionIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of section ids. Order defines the navigation sequence.
///
/// An empty list is valid: a navigator over it has nothing to step through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionList(Vec<SectionId>);

impl SectionList {
    /// Builds a list from raw strings, rejecting blank ids.
    pub fn from_strs<I, S>(ids: I) -> Result<Self, EmptySectionIdError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .map(SectionId::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SectionId> {
        self.0.get(index)
    }

    #[must_use]
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == id)
    }

    /// Highest valid index, or 0 for an empty list.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.0.iter()
    }

    /// Stable key of the whole list; two lists with the same ids in the same
    /// order produce the same key.
    #[must_use]
    pub fn key(&self) -> String {
        self.0
            .iter()
            .map(SectionId::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl FromIterator<SectionId> for SectionList {
    fn from_iter<T: IntoIterator<Item = SectionId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
