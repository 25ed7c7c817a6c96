use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and tests.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Intended only for hardcoded valid tokens in fixtures and test scenarios.
    /// Runtime input goes through [`super::try_parse_cards`] instead.
    ///
    /// # Panics
    /// Panics on an invalid token.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Parse a whitespace-separated list of tokens, e.g. `"KS KH KC"`.
    ///
    /// # Panics
    /// Panics on an invalid token.
    pub fn hand(tokens: &str) -> Vec<Card> {
        let tokens: Vec<&str> = tokens.split_whitespace().collect();
        Self::parse_hardcoded(&tokens)
    }
}
