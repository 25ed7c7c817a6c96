//! Card parsing from token representations (e.g., "AS", "TD", "5C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::{DomainError, ValidationKind};

impl Rank {
    /// Token character: `5`-`9`, `T`, `J`, `Q`, `K`, `A`, `2`.
    pub const fn token_char(self) -> char {
        match self {
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
        }
    }

    pub fn from_token_char(ch: char) -> Result<Self, DomainError> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.token_char() == ch)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseRank, format!("Parse rank: {ch}"))
            })
    }
}

impl Suit {
    /// Token character: `D`, `C`, `H`, `S`.
    pub const fn token_char(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_token_char(ch: char) -> Result<Self, DomainError> {
        Suit::ALL
            .iter()
            .copied()
            .find(|s| s.token_char() == ch)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseSuit, format!("Parse suit: {ch}"))
            })
    }
}

impl Card {
    /// Two-character token, rank first (e.g. "KS").
    pub fn token(&self) -> String {
        format!("{}{}", self.rank.token_char(), self.suit.token_char())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad_token =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(bad_token());
        };
        let rank = Rank::from_token_char(rank_ch).map_err(|_| bad_token())?;
        let suit = Suit::from_token_char(suit_ch).map_err(|_| bad_token())?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "5C") into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
