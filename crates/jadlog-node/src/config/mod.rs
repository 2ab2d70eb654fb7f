//! Configuration loading and resolution.

use jadlog_tracking::FetcherConfig;

pub const URL_ENV: &str = "JADLOG_TRACKING_URL";
pub const TIMEOUT_ENV: &str = "JADLOG_TIMEOUT_MS";

/// Resolve fetcher settings: explicit value, then environment, then default.
pub fn resolve_fetcher_config(explicit_url: Option<&str>, explicit_timeout_ms: Option<u64>) -> FetcherConfig {
    resolve_with(explicit_url, explicit_timeout_ms, |key| std::env::var(key).ok())
}

fn resolve_with(
    explicit_url: Option<&str>,
    explicit_timeout_ms: Option<u64>,
    env: impl Fn(&str) -> Option<String>,
) -> FetcherConfig {
    let mut config = FetcherConfig::default();

    if let Some(url) = explicit_url.map(str::to_string).or_else(|| env(URL_ENV)) {
        config.base_url = url;
    }

    if let Some(ms) = explicit_timeout_ms {
        config.timeout_ms = ms;
    } else if let Some(raw) = env(TIMEOUT_ENV) {
        match raw.trim().parse() {
            Ok(ms) => config.timeout_ms = ms,
            Err(_) => tracing::warn!("Ignoring {TIMEOUT_ENV}={raw:?}: not a number of milliseconds"),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use jadlog_tracking::{DEFAULT_TIMEOUT_MS, DEFAULT_TRACKING_URL};

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = resolve_with(None, None, env_of(&[]));
        assert_eq!(config.base_url, DEFAULT_TRACKING_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_env_overrides_default() {
        let config = resolve_with(
            None,
            None,
            env_of(&[(URL_ENV, "http://mirror.local/track"), (TIMEOUT_ENV, "2500")]),
        );
        assert_eq!(config.base_url, "http://mirror.local/track");
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn test_explicit_overrides_env() {
        let config = resolve_with(
            Some("http://explicit/track"),
            Some(100),
            env_of(&[(URL_ENV, "http://mirror.local/track"), (TIMEOUT_ENV, "2500")]),
        );
        assert_eq!(config.base_url, "http://explicit/track");
        assert_eq!(config.timeout_ms, 100);
    }

    #[test]
    fn test_bad_timeout_env_is_ignored() {
        let config = resolve_with(None, None, env_of(&[(TIMEOUT_ENV, "soon")]));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
