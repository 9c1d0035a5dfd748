//! Deck file loading.

use std::path::{Path, PathBuf};

use kickoff_types::{Deck, DeckError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckParseError {
    #[error("invalid deck TOML")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] DeckError),
}

#[derive(Debug, Error)]
pub enum DeckLoadError {
    #[error("failed to read deck at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load deck at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: DeckParseError,
    },
}

/// Parses and validates a deck document.
pub fn parse_deck(content: &str) -> Result<Deck, DeckParseError> {
    let deck: Deck = toml::from_str(content)?;
    deck.validate()?;
    Ok(deck)
}

pub fn load_deck(path: &Path) -> Result<Deck, DeckLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| DeckLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let deck = parse_deck(&content).map_err(|source| DeckLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), sections = deck.len(), "Deck loaded");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::{DeckLoadError, DeckParseError, load_deck, parse_deck};
    use kickoff_types::DeckError;

    const SMALL_DECK: &str = r#"
title = "Kickoff"

[[sections]]
id = "home"
title = "Audit"

[[sections]]
id = "context"
eyebrow = "Framing"
title = "Context"
subtitle = "Why we are here"

[[sections.cards]]
title = "Contract"
text = "Managed operation agreement."

[[sections]]
id = "team"
title = "Team"

[[sections.team]]
name = "A. Lead"
role = "Engagement director"
tags = ["Steering", "Review"]
"#;

    #[test]
    fn parses_sections_in_order() {
        let deck = parse_deck(SMALL_DECK).unwrap();
        assert_eq!(deck.title, "Kickoff");
        assert_eq!(deck.section_ids().key(), "home|context|team");
        assert_eq!(deck.sections[1].cards.len(), 1);
        assert_eq!(deck.sections[1].subtitle.as_deref(), Some("Why we are here"));
        assert_eq!(deck.sections[2].team[0].tags, ["Steering", "Review"]);
        assert!(deck.sections[0].eyebrow.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_deck(
            "title = \"t\"\n[[sections]]\nid = \"a\"\ntitle = \"A\"\n[[sections]]\nid = \"a\"\ntitle = \"B\"\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DeckParseError::Invalid(DeckError::DuplicateSection(_))
        ));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = parse_deck("title = \"t\"\n[[sections]]\nid = \" \"\ntitle = \"A\"\n").unwrap_err();
        assert!(matches!(err, DeckParseError::Toml(_)));
    }

    #[test]
    fn deck_without_sections_is_valid() {
        let deck = parse_deck("title = \"Empty\"\n").unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn load_deck_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(&path, SMALL_DECK).unwrap();
        assert_eq!(load_deck(&path).unwrap().len(), 3);
    }

    #[test]
    fn load_deck_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_deck(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DeckLoadError::Read { .. }));
    }
}
