//! Proptest case budget shared by the unit and integration suites.
//!
//! Compiled into the library's unit tests through a `#[path]` module and into
//! the integration tests through `common`, so both read one definition.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of proptest cases.
const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";

/// Builds a proptest configuration, honouring `PROGTEST_CASES` when it holds
/// a positive integer.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let raw = env::var(PROGTEST_CASES_ENV_KEY).ok();
    ProptestConfig {
        cases: resolve_cases(raw.as_deref(), default_cases),
        ..ProptestConfig::default()
    }
}

fn resolve_cases(raw: Option<&str>, default_cases: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|cases| *cases > 0)
        .unwrap_or(default_cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::unset(None, 64)]
    #[case::override_applies(Some("512"), 512)]
    #[case::surrounding_whitespace(Some(" 8\n"), 8)]
    #[case::zero_falls_back(Some("0"), 64)]
    #[case::garbage_falls_back(Some("many"), 64)]
    #[case::negative_falls_back(Some("-3"), 64)]
    fn resolves_case_budget(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(resolve_cases(raw, 64), expected);
    }
}
