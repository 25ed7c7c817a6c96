//! Proptest configuration shared by every property test in the workspace.

use std::env;

use proptest::prelude::ProptestConfig;

/// Default number of cases when `PROPTEST_CASES` is unset.
pub const DEFAULT_CASES: u32 = 64;

/// Build a proptest config from the environment.
///
/// Increase cases locally with `PROPTEST_CASES=2000 cargo test`.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CASES);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
