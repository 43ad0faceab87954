//! Server configuration read from the environment.

use std::path::PathBuf;

use db::DbConfig;

/// Environment variable holding the SurrealDB endpoint.
pub const DB_ENDPOINT_VAR: &str = "PORTAL_DB_ENDPOINT";
/// Environment variable pointing at a JSON seed file.
pub const SEED_PATH_VAR: &str = "PORTAL_SEED_PATH";
/// Environment variable capping the dashboard's recent-activity lists.
pub const RECENT_LIMIT_VAR: &str = "PORTAL_RECENT_LIMIT";

const DEFAULT_RECENT_LIMIT: usize = 3;

/// Settings for the portal server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub db: DbConfig,
    /// Seed file used instead of the built-in seed.
    pub seed_path: Option<PathBuf>,
    pub recent_limit: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            db: DbConfig::memory(),
            seed_path: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl PortalConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db = match lookup(DB_ENDPOINT_VAR).filter(|v| !v.is_empty()) {
            Some(endpoint) => DbConfig::endpoint(endpoint),
            // Railway deployment - use file-based storage
            None if lookup("RAILWAY_ENVIRONMENT").is_some() => DbConfig::file("./data/surrealdb"),
            None => DbConfig::memory(),
        };

        let recent_limit = match lookup(RECENT_LIMIT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Ignoring invalid {}", RECENT_LIMIT_VAR);
                DEFAULT_RECENT_LIMIT
            }),
            None => DEFAULT_RECENT_LIMIT,
        };

        Self {
            db,
            seed_path: lookup(SEED_PATH_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            recent_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> PortalConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PortalConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_memory_store() {
        assert_eq!(config(&[]), PortalConfig::default());
        assert!(config(&[]).db.is_memory());
    }

    #[test]
    fn railway_uses_file_store() {
        let cfg = config(&[("RAILWAY_ENVIRONMENT", "production")]);
        assert_eq!(cfg.db.endpoint, "file://./data/surrealdb");
    }

    #[test]
    fn explicit_endpoint_wins() {
        let cfg = config(&[
            ("RAILWAY_ENVIRONMENT", "production"),
            (DB_ENDPOINT_VAR, "rocksdb://./portal.db"),
        ]);
        assert_eq!(cfg.db.endpoint, "rocksdb://./portal.db");
    }

    #[test]
    fn seed_path_and_limit() {
        let cfg = config(&[(SEED_PATH_VAR, "/srv/seed.json"), (RECENT_LIMIT_VAR, " 5 ")]);
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/srv/seed.json")));
        assert_eq!(cfg.recent_limit, 5);
    }

    #[test]
    fn invalid_limit_falls_back() {
        let cfg = config(&[(RECENT_LIMIT_VAR, "many")]);
        assert_eq!(cfg.recent_limit, 3);
    }
}
