use std::time::Duration;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PRICING_CONFIG_PATH | (unset) | JSON tariff snapshot; built-in defaults when unset |
/// | RATE_TABLE_PATH | (unset) | JSON array of route rates |
/// | CONFIG_CACHE_TTL_SECS | 300 | Lifetime of a cached tariff snapshot |
/// | LOG_LEVEL | info | Logger level |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// PRICING_CONFIG_PATH=/etc/freight/tariff.json RATE_TABLE_PATH=/etc/freight/rates.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Tariff snapshot file
    pub pricing_config_path: Option<String>,
    /// Route rate table file
    pub rate_table_path: Option<String>,
    pub config_cache_ttl_secs: u64,
    /// trace | debug | info | warn | error
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables, defaults for anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            pricing_config_path: non_empty("PRICING_CONFIG_PATH"),
            rate_table_path: non_empty("RATE_TABLE_PATH"),
            config_cache_ttl_secs: lookup("CONFIG_CACHE_TTL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(300),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    /// Point the engine at explicit data files
    ///
    /// Mostly used by tests
    pub fn with_overrides(
        pricing_config_path: Option<&str>,
        rate_table_path: Option<&str>,
    ) -> Self {
        let mut config = Self::from_env();
        config.pricing_config_path = pricing_config_path.map(str::to_owned);
        config.rate_table_path = rate_table_path.map(str::to_owned);
        config
    }

    pub fn config_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.config_cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.pricing_config_path, None);
        assert_eq!(config.rate_table_path, None);
        assert_eq!(config.config_cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = load(&[
            ("PRICING_CONFIG_PATH", "/etc/freight/tariff.json"),
            ("RATE_TABLE_PATH", "/etc/freight/rates.json"),
            ("CONFIG_CACHE_TTL_SECS", "60"),
            ("LOG_LEVEL", "debug"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/freight"),
        ]);
        assert_eq!(config.pricing_config_path.as_deref(), Some("/etc/freight/tariff.json"));
        assert_eq!(config.rate_table_path.as_deref(), Some("/etc/freight/rates.json"));
        assert_eq!(config.config_cache_ttl_secs, 60);
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/freight"));
    }

    #[test]
    fn test_blank_and_unparsable_values_fall_back() {
        let config = load(&[
            ("PRICING_CONFIG_PATH", "  "),
            ("CONFIG_CACHE_TTL_SECS", "five minutes"),
            ("LOG_JSON", "yes"),
        ]);
        assert_eq!(config.pricing_config_path, None);
        assert_eq!(config.config_cache_ttl_secs, 300);
        assert!(!config.log_json);
    }
}
