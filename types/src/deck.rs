//! Deck content: the sections shown by the host view.
//!
//! A deck is plain data. Loading it from disk lives in `kickoff-config`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{SectionId, SectionList};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("duplicate section id `{0}`")]
    DuplicateSection(SectionId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One full-viewport section of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Short label shown above the title.
    #[serde(default)]
    pub eyebrow: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub name: String,
    pub role: String,
}

impl Deck {
    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), DeckError> {
        let mut seen = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if !seen.insert(&section.id) {
                return Err(DeckError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    /// Navigation order of the deck.
    #[must_use]
    pub fn section_ids(&self) -> SectionList {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
