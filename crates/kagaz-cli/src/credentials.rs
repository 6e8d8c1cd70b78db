//! Credential loading from flags and environment

use std::env;

/// Environment variable prefix scanned for credentials.
pub const CREDENTIAL_ENV_PREFIX: &str = "GEMINI_API_KEY_";

/// Resolve the credential pool: explicit flags win, otherwise scan
/// numbered environment variables (`GEMINI_API_KEY_1`, `GEMINI_API_KEY_2`,
/// ...) until the first gap.
pub fn load_credentials(cli_keys: &[String]) -> Vec<String> {
    if !cli_keys.is_empty() {
        return cli_keys.to_vec();
    }
    from_env(CREDENTIAL_ENV_PREFIX)
}

/// Scan `<prefix>1`, `<prefix>2`, ... in order, stopping at the first
/// unset or empty variable.
pub fn from_env(prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for index in 1.. {
        match env::var(format!("{prefix}{index}")) {
            Ok(key) if !key.is_empty() => keys.push(key),
            _ => break,
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_keys_win_over_env() {
        let keys = load_credentials(&["flag-key".to_string()]);
        assert_eq!(keys, vec!["flag-key"]);
    }

    #[test]
    fn test_env_scan_in_order() {
        // Unique prefix per test: the process environment is shared.
        env::set_var("KAGAZ_TEST_SCAN_1", "first");
        env::set_var("KAGAZ_TEST_SCAN_2", "second");

        assert_eq!(from_env("KAGAZ_TEST_SCAN_"), vec!["first", "second"]);
    }

    #[test]
    fn test_env_scan_stops_at_gap() {
        env::set_var("KAGAZ_TEST_GAP_1", "first");
        env::set_var("KAGAZ_TEST_GAP_3", "after the gap");

        assert_eq!(from_env("KAGAZ_TEST_GAP_"), vec!["first"]);
    }

    #[test]
    fn test_missing_env_yields_empty_pool() {
        assert!(from_env("KAGAZ_TEST_ABSENT_").is_empty());
    }
}
