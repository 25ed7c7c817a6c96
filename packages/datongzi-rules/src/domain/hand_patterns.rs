//! Greedy, non-overlapping decomposition of a hand into resource buckets.
//!
//! Buckets are filled strictly in this order, each stage seeing only the cards
//! earlier stages left behind:
//! Dizha, Tongzi, Bomb, Airplane chains, Triples, Consecutive-pair chains,
//! Pairs, Singles.
//!
//! Triples are taken before consecutive pairs so a triple never gets split
//! into a pair plus a leftover single.

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cards_types::{Card, Rank, Suit};
use super::play_types::PlayType;
use super::recognizer::recognize;

/// A hand split into mutually exclusive resource buckets.
///
/// Every card of the analyzed hand appears in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPatterns {
    pub dizha: Vec<Vec<Card>>,
    pub tongzi: Vec<Vec<Card>>,
    pub bombs: Vec<Vec<Card>>,
    pub airplane_chains: Vec<Vec<Card>>,
    pub triples: Vec<Vec<Card>>,
    pub consecutive_pair_chains: Vec<Vec<Card>>,
    pub pairs: Vec<Vec<Card>>,
    pub singles: Vec<Card>,

    pub total_cards: usize,
    /// Dizha + Tongzi + Bomb groups.
    pub trump_count: usize,
    /// The hand holds at least one 2, A or K.
    pub has_control_cards: bool,
}

impl HandPatterns {
    /// Every card across every bucket, in bucket order.
    pub fn all_cards(&self) -> Vec<Card> {
        let groups = [
            &self.dizha,
            &self.tongzi,
            &self.bombs,
            &self.airplane_chains,
            &self.triples,
            &self.consecutive_pair_chains,
            &self.pairs,
        ];
        let mut cards: Vec<Card> = groups
            .into_iter()
            .flatten()
            .flatten()
            .copied()
            .collect();
        cards.extend_from_slice(&self.singles);
        cards
    }

    /// Number of separate plays needed to shed the hand bucket by bucket.
    pub fn play_count(&self) -> usize {
        self.dizha.len()
            + self.tongzi.len()
            + self.bombs.len()
            + self.airplane_chains.len()
            + self.triples.len()
            + self.consecutive_pair_chains.len()
            + self.pairs.len()
            + self.singles.len()
    }
}

impl fmt::Display for HandPatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HandPatterns({} cards):", self.total_cards)?;
        writeln!(
            f,
            "  Trump: {} (Dizha:{}, Tongzi:{}, Bombs:{})",
            self.trump_count,
            self.dizha.len(),
            self.tongzi.len(),
            self.bombs.len()
        )?;
        writeln!(
            f,
            "  Chains: Airplanes:{}, ConsecPairs:{}",
            self.airplane_chains.len(),
            self.consecutive_pair_chains.len()
        )?;
        write!(
            f,
            "  Basic: Triples:{}, Pairs:{}, Singles:{}",
            self.triples.len(),
            self.pairs.len(),
            self.singles.len()
        )
    }
}

/// Multiset of the cards not yet assigned to a bucket.
///
/// Counts are indexed by (rank, suit); extraction decrements, so no card can be
/// handed out twice.
struct CardPool {
    counts: [[usize; 4]; 11],
}

impl CardPool {
    fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [[0; 4]; 11];
        for card in cards {
            counts[card.rank.index()][card.suit.index()] += 1;
        }
        Self { counts }
    }

    fn rank_count(&self, rank: Rank) -> usize {
        self.counts[rank.index()].iter().sum()
    }

    fn suit_count(&self, rank: Rank, suit: Suit) -> usize {
        self.counts[rank.index()][suit.index()]
    }

    fn take_suited(&mut self, rank: Rank, suit: Suit, n: usize) -> Vec<Card> {
        let slot = &mut self.counts[rank.index()][suit.index()];
        let taken = n.min(*slot);
        *slot -= taken;
        vec![Card::new(suit, rank); taken]
    }

    /// Take up to `n` cards of `rank`, highest suit first.
    fn take(&mut self, rank: Rank, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for suit in Suit::ALL.into_iter().rev() {
            let need = n - taken.len();
            if need == 0 {
                break;
            }
            taken.extend(self.take_suited(rank, suit, need));
        }
        taken
    }

    fn restore(&mut self, cards: &[Card]) {
        for card in cards {
            self.counts[card.rank.index()][card.suit.index()] += 1;
        }
    }

    fn drain(&mut self) -> Vec<Card> {
        let mut cards = Vec::new();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let n = self.suit_count(rank, suit);
                cards.extend(self.take_suited(rank, suit, n));
            }
        }
        cards
    }

    /// Maximal runs (length >= 2) of ranks holding at least `per_rank` cards,
    /// longest first, higher runs first within a length.
    fn runs(&self, per_rank: usize) -> Vec<Vec<Rank>> {
        let mut runs: Vec<Vec<Rank>> = Vec::new();
        let mut current: Vec<Rank> = Vec::new();
        for rank in Rank::ALL {
            if self.rank_count(rank) >= per_rank {
                current.push(rank);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs.retain(|run| run.len() >= 2);
        runs.sort_by_key(|run| (Reverse(run.len()), Reverse(run.last().copied())));
        runs
    }

    /// Move `group` into a bucket if the recognizer agrees it is `expected`;
    /// otherwise put its cards back for later stages.
    fn commit(&mut self, group: Vec<Card>, expected: PlayType) -> Option<Vec<Card>> {
        match recognize(&group) {
            Some(p) if p.play_type == expected => Some(group),
            other => {
                warn!(
                    expected = %expected,
                    recognized = ?other.map(|p| p.play_type),
                    card_count = group.len(),
                    "Extracted group failed self-validation; returning cards to pool"
                );
                self.restore(&group);
                None
            }
        }
    }
}

/// Decompose a hand into non-overlapping resource buckets.
///
/// The union of all buckets equals `hand` exactly: nothing duplicated, nothing
/// dropped. Each multi-card group is re-checked by the recognizer before it is
/// accepted into its bucket.
pub fn decompose(hand: &[Card]) -> HandPatterns {
    let mut pool = CardPool::from_cards(hand);
    let mut patterns = HandPatterns {
        total_cards: hand.len(),
        ..HandPatterns::default()
    };

    patterns.dizha = extract_dizha(&mut pool);
    patterns.tongzi = extract_tongzi(&mut pool);
    patterns.bombs = extract_bombs(&mut pool);
    patterns.airplane_chains = extract_chains(&mut pool, 3, PlayType::Airplane);
    patterns.triples = extract_same_rank(&mut pool, 3, PlayType::Triple);
    patterns.consecutive_pair_chains = extract_chains(&mut pool, 2, PlayType::ConsecutivePairs);
    patterns.pairs = extract_same_rank(&mut pool, 2, PlayType::Pair);
    patterns.singles = pool.drain();

    for bucket in [
        &mut patterns.dizha,
        &mut patterns.tongzi,
        &mut patterns.bombs,
        &mut patterns.airplane_chains,
        &mut patterns.triples,
        &mut patterns.consecutive_pair_chains,
        &mut patterns.pairs,
    ] {
        sort_by_strength_desc(bucket);
    }
    patterns
        .singles
        .sort_by_key(|c| Reverse((c.rank, c.suit)));

    patterns.trump_count = patterns.dizha.len() + patterns.tongzi.len() + patterns.bombs.len();
    patterns.has_control_cards = hand.iter().any(Card::is_control_card);

    debug!(
        total_cards = patterns.total_cards,
        trump_count = patterns.trump_count,
        airplanes = patterns.airplane_chains.len(),
        triples = patterns.triples.len(),
        pair_chains = patterns.consecutive_pair_chains.len(),
        pairs = patterns.pairs.len(),
        singles = patterns.singles.len(),
        "Decomposed hand"
    );
    patterns
}

fn extract_dizha(pool: &mut CardPool) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    for rank in Rank::ALL {
        while Suit::ALL.iter().all(|&s| pool.suit_count(rank, s) >= 2) {
            let group: Vec<Card> = Suit::ALL
                .iter()
                .flat_map(|&s| pool.take_suited(rank, s, 2))
                .collect();
            match pool.commit(group, PlayType::Dizha) {
                Some(group) => found.push(group),
                None => break,
            }
        }
    }
    found
}

fn extract_tongzi(pool: &mut CardPool) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            while pool.suit_count(rank, suit) >= 3 {
                let group = pool.take_suited(rank, suit, 3);
                match pool.commit(group, PlayType::Tongzi) {
                    Some(group) => found.push(group),
                    None => break,
                }
            }
        }
    }
    found
}

/// Each rank with four or more cards becomes one bomb holding all of them.
fn extract_bombs(pool: &mut CardPool) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    for rank in Rank::ALL {
        let count = pool.rank_count(rank);
        if count >= 4 {
            let group = pool.take(rank, count);
            found.extend(pool.commit(group, PlayType::Bomb));
        }
    }
    found
}

/// Longest-first chains taking `per_rank` cards from each rank of a run.
fn extract_chains(pool: &mut CardPool, per_rank: usize, expected: PlayType) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    for run in pool.runs(per_rank) {
        // Earlier runs are disjoint, but re-check in case a commit was rejected.
        if run.iter().any(|&r| pool.rank_count(r) < per_rank) {
            continue;
        }
        let group: Vec<Card> = run
            .iter()
            .flat_map(|&rank| pool.take(rank, per_rank))
            .collect();
        found.extend(pool.commit(group, expected));
    }
    found
}

fn extract_same_rank(pool: &mut CardPool, size: usize, expected: PlayType) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    for rank in Rank::ALL {
        while pool.rank_count(rank) >= size {
            let group = pool.take(rank, size);
            match pool.commit(group, expected) {
                Some(group) => found.push(group),
                None => break,
            }
        }
    }
    found
}

fn sort_by_strength_desc(groups: &mut [Vec<Card>]) {
    groups.sort_by_cached_key(|group| Reverse(recognize(group).map(|p| p.strength)));
}
