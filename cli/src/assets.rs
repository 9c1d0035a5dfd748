use kickoff_engine::Deck;
use kickoff_engine::config::{DeckParseError, parse_deck};

const DEFAULT_DECK_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/deck.toml"));

/// The kickoff deck compiled into the binary.
pub fn default_deck() -> Result<Deck, DeckParseError> {
    parse_deck(DEFAULT_DECK_RAW)
}

#[cfg(test)]
mod tests {
    use super::default_deck;

    #[test]
    fn built_in_deck_parses() {
        let deck = default_deck().unwrap();
        assert_eq!(
            deck.section_ids().key(),
            "home|context|goals|refs|team|plan"
        );
        let team = deck.sections.iter().find(|s| s.id.as_str() == "team").unwrap();
        assert_eq!(team.team.len(), 6);
        assert_eq!(team.team[0].collaborators.len(), 2);
    }
}
