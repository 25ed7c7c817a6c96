//! Play shapes and recognized patterns

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_types::{Rank, Suit};

/// The ten play shapes, in base strength order.
///
/// The base order is necessary but not sufficient for comparison: trump
/// overrides and same-type gating live in [`super::validator`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayType {
    Single,
    Pair,
    ConsecutivePairs,
    Triple,
    TripleWithTwo,
    Airplane,
    AirplaneWithWings,
    Bomb,
    Tongzi,
    Dizha,
}

impl PlayType {
    pub const ALL: [PlayType; 10] = [
        PlayType::Single,
        PlayType::Pair,
        PlayType::ConsecutivePairs,
        PlayType::Triple,
        PlayType::TripleWithTwo,
        PlayType::Airplane,
        PlayType::AirplaneWithWings,
        PlayType::Bomb,
        PlayType::Tongzi,
        PlayType::Dizha,
    ];

    /// Bomb, Tongzi and Dizha beat structurally different plays.
    pub const fn is_trump(self) -> bool {
        matches!(self, PlayType::Bomb | PlayType::Tongzi | PlayType::Dizha)
    }

    /// Chains compare only against chains of the same length.
    pub const fn is_chain(self) -> bool {
        matches!(
            self,
            PlayType::ConsecutivePairs | PlayType::Airplane | PlayType::AirplaneWithWings
        )
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayType::Single => "Single",
            PlayType::Pair => "Pair",
            PlayType::ConsecutivePairs => "ConsecutivePairs",
            PlayType::Triple => "Triple",
            PlayType::TripleWithTwo => "TripleWithTwo",
            PlayType::Airplane => "Airplane",
            PlayType::AirplaneWithWings => "AirplaneWithWings",
            PlayType::Bomb => "Bomb",
            PlayType::Tongzi => "Tongzi",
            PlayType::Dizha => "Dizha",
        };
        f.write_str(s)
    }
}

/// The recognized shape of a card multiset.
///
/// Always built by the recognizer; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub play_type: PlayType,
    /// Comparison rank. For chains, the highest rank in the chain.
    pub primary_rank: Rank,
    /// Only set for Single and Tongzi.
    pub primary_suit: Option<Suit>,
    /// Every rank in the chain, ascending. Empty for non-chains.
    pub secondary_ranks: Vec<Rank>,
    pub card_count: usize,
    /// Same-type comparison key.
    pub strength: u32,
}

impl Pattern {
    pub fn chain_length(&self) -> usize {
        self.secondary_ranks.len()
    }

    pub fn is_trump(&self) -> bool {
        self.play_type.is_trump()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.play_type {
            PlayType::Single | PlayType::Tongzi => match self.primary_suit {
                Some(suit) => write!(f, "{}({}{})", self.play_type, self.primary_rank, suit),
                None => write!(f, "{}({})", self.play_type, self.primary_rank),
            },
            PlayType::Bomb => write!(f, "Bomb({} x{})", self.primary_rank, self.card_count),
            PlayType::ConsecutivePairs | PlayType::Airplane | PlayType::AirplaneWithWings => {
                let ranks: Vec<String> = self.secondary_ranks.iter().map(|r| r.to_string()).collect();
                write!(f, "{}({})", self.play_type, ranks.join("-"))?;
                if self.play_type == PlayType::AirplaneWithWings {
                    let wings = self.card_count - 3 * self.chain_length();
                    write!(f, "+{wings}")?;
                }
                Ok(())
            }
            _ => write!(f, "{}({})", self.play_type, self.primary_rank),
        }
    }
}
