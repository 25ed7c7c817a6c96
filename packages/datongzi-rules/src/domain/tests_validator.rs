use crate::domain::{beats, pattern_beats, recognize, CardFixtures, Pattern};

fn pattern(tokens: &str) -> Pattern {
    recognize(&CardFixtures::hand(tokens)).expect("hardcoded valid play")
}

fn beats_tokens(new: &str, current: &str) -> bool {
    beats(&CardFixtures::hand(new), Some(&pattern(current)))
}

#[test]
fn unopened_round_accepts_any_valid_play() {
    assert!(beats(&CardFixtures::hand("5D"), None));
    assert!(beats(&CardFixtures::hand("5S 5H 6S 6H"), None));
    assert!(!beats(&CardFixtures::hand("5S 6H"), None));
    assert!(!beats(&[], None));
}

#[test]
fn unrecognized_cards_never_beat() {
    assert!(!beats_tokens("AS KH", "5D"));
    assert!(!beats(&[], Some(&pattern("5D"))));
}

#[test]
fn tongzi_beats_any_bomb() {
    assert!(beats_tokens("AS AS AS", "7S 7H 7C 7D"));
    assert!(beats_tokens("5D 5D 5D", "2S 2H 2C 2D 2S 2H 2C"));
}

#[test]
fn different_plain_types_never_beat() {
    assert!(!beats_tokens("QS QH", "5S 5H 5C"));
    assert!(!beats_tokens("5S 5H 5C", "QS QH"));
    assert!(!beats_tokens("5S 5H 5C 6S 6H 6C", "5S 5H 5C 6S 6H 6C 9S TD"));
}

#[test]
fn dizha_beats_everything_but_an_equal_or_higher_dizha() {
    let dizha_k = "KS KS KH KH KC KC KD KD";
    assert!(beats_tokens(dizha_k, "2D"));
    assert!(beats_tokens(dizha_k, "2S 2H 2C 2D 2S"));
    assert!(beats_tokens(dizha_k, "2S 2S 2S"));
    assert!(beats_tokens(dizha_k, "QS QS QH QH QC QC QD QD"));
    assert!(!beats_tokens(dizha_k, dizha_k));
    assert!(!beats_tokens(dizha_k, "AS AS AH AH AC AC AD AD"));
}

#[test]
fn only_a_higher_dizha_beats_a_dizha() {
    let dizha_5 = "5S 5S 5H 5H 5C 5C 5D 5D";
    assert!(!beats_tokens("2S 2S 2S", dizha_5));
    assert!(!beats_tokens("2S 2H 2C 2D 2S 2H 2C", dizha_5));
    assert!(!beats_tokens("2S", dizha_5));
}

#[test]
fn tongzi_against_tongzi_compares_rank_then_suit() {
    assert!(beats_tokens("KS KS KS", "KH KH KH"));
    assert!(!beats_tokens("KD KD KD", "KS KS KS"));
    assert!(!beats_tokens("KS KS KS", "KS KS KS"));
    assert!(beats_tokens("AD AD AD", "KS KS KS"));
    assert!(!beats_tokens("QS QS QS", "KD KD KD"));
}

#[test]
fn tongzi_beats_nothing_plain() {
    assert!(!beats_tokens("2S 2S 2S", "5D"));
    assert!(!beats_tokens("2S 2S 2S", "5S 5H"));
    assert!(!beats_tokens("2S 2S 2S", "5S 5H 5C"));
    assert!(!beats_tokens("2S 2S 2S", "5S 5H 6S 6H"));
}

#[test]
fn only_tongzi_or_dizha_beats_a_tongzi() {
    assert!(!beats_tokens("2S 2H 2C 2D 2S 2H 2C", "5D 5D 5D"));
    assert!(!beats_tokens("2S", "5D 5D 5D"));
}

#[test]
fn bomb_against_bomb_compares_rank_then_count() {
    assert!(beats_tokens("7S 7H 7C 7D 7S", "7S 7H 7C 7D"));
    assert!(!beats_tokens("7S 7H 7C 7D", "7S 7H 7C 7D 7S"));
    assert!(!beats_tokens("7S 7H 7C 7D", "7S 7H 7C 7D"));
    assert!(beats_tokens("8S 8H 8C 8D", "7S 7H 7C 7D 7S 7H"));
    assert!(!beats_tokens("7S 7H 7C 7D 7S 7H", "8S 8H 8C 8D"));
}

#[test]
fn bomb_beats_any_plain_play() {
    let bomb = "5S 5H 5C 5D";
    assert!(beats_tokens(bomb, "2D"));
    assert!(beats_tokens(bomb, "2S 2H"));
    assert!(beats_tokens(bomb, "AS AH AC KS KH"));
    assert!(beats_tokens(bomb, "KS KH KC AS AH AC 2S 2H 2C"));
    assert!(beats_tokens(bomb, "5S 5H 5C 6S 6H 6C 9S TD"));
}

#[test]
fn plain_plays_never_beat_a_bomb() {
    assert!(!beats_tokens("2S", "5S 5H 5C 5D"));
    assert!(!beats_tokens("2S 2H 2C", "5S 5H 5C 5D"));
}

#[test]
fn same_type_needs_strictly_greater_strength() {
    assert!(beats_tokens("2D", "AS"));
    assert!(!beats_tokens("AS", "AS"));
    // Singles and pairs compare rank only; suits never break a tie.
    assert!(!beats_tokens("KS", "KD"));
    assert!(!beats_tokens("KS KS", "KH KD"));
    assert!(beats_tokens("AS AH AC 5S 5H", "KS KH KC 2S 2H"));
}

#[test]
fn chains_only_compare_at_equal_length() {
    assert!(beats_tokens("6S 6H 7S 7H", "5S 5H 6S 6H"));
    assert!(!beats_tokens("5S 5H 6S 6H 7S 7H", "QS QH KS KH"));
    assert!(!beats_tokens("AS AH 2S 2H", "5S 5H 6S 6H 7S 7H"));
    assert!(beats_tokens("6S 6H 6C 7S 7H 7C", "5S 5H 5C 6S 6H 6C"));
    assert!(!beats_tokens(
        "5S 5H 5C 6S 6H 6C 7S 7H 7C",
        "QS QH QC KS KH KC"
    ));
}

#[test]
fn airplanes_with_wings_only_compare_at_equal_body_length() {
    let low_long = "5S 5H 5C 6S 6H 6C 7S 7H 7C 9D TD JD";
    let high_short = "QS QH QC KS KH KC 5D 6D";
    assert!(!beats_tokens(high_short, low_long));
    assert!(!beats_tokens(low_long, high_short));
}

#[test]
fn airplane_with_wings_compares_body_not_wings() {
    assert!(beats_tokens(
        "6S 6H 6C 7S 7H 7C 5D 5C",
        "5S 5H 5C 6S 6H 6C 2S 2H"
    ));
    assert!(!beats_tokens(
        "5S 5H 5C 6S 6H 6C 2S 2H",
        "5S 5H 5C 6S 6H 6C 9D TD"
    ));
}

#[test]
fn pattern_beats_is_asymmetric_for_trumps() {
    let tongzi = pattern("9H 9H 9H");
    let bomb = pattern("2S 2H 2C 2D");
    assert!(pattern_beats(&tongzi, &bomb));
    assert!(!pattern_beats(&bomb, &tongzi));
}
