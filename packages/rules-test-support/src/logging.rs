//! Test logging for the rules engine.
//!
//! Used by both unit tests (through a `ctor` hook in the library) and
//! integration tests (through `tests/support`).

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// The rules crate's own target.
const RULES_TARGET: &str = "datongzi_rules";

/// Quiet for dependencies, rule-engine warnings (decomposer self-validation) still shown.
const DEFAULT_DIRECTIVES: &str = "error,datongzi_rules=warn";

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Resolve the filter directives from `TEST_LOG` and `RUST_LOG` values.
///
/// A bare level in `TEST_LOG` (`TEST_LOG=trace`) applies to the rules crate
/// only, so recognizer traces don't drown in subscriber noise. Anything else
/// in `TEST_LOG` is taken as full directives. `RUST_LOG` is always passed
/// through unchanged.
pub fn directives(test_log: Option<&str>, rust_log: Option<&str>) -> String {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }
    match (non_empty(test_log), non_empty(rust_log)) {
        (Some(level), _) if LEVELS.contains(&level.to_ascii_lowercase().as_str()) => {
            format!("error,{RULES_TARGET}={level}")
        }
        (Some(custom), _) => custom.to_string(),
        (None, Some(rust_log)) => rust_log.to_string(),
        (None, None) => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter comes from [`directives`]:
///
/// 1. `TEST_LOG` environment variable (preferred, bare levels scoped to `datongzi_rules`)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `error,datongzi_rules=warn` (default, quiet)
///
/// Directives that fail to parse fall back to the default.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let test_log = std::env::var("TEST_LOG").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = EnvFilter::try_new(directives(test_log.as_deref(), rust_log.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok();
    });
}
