use std::path::PathBuf;

/// Database file name inside the data directory
const DB_FILE: &str = "stock.redb";

/// Configuration for the ledger core
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the snapshot database
    pub data_dir: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("STOCK_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Path of the snapshot database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(DB_FILE)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
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

    #[test]
    fn test_db_path_joins_data_dir() {
        let config = Config {
            data_dir: "/var/lib/stock".to_string(),
            environment: "production".to_string(),
        };
        assert_eq!(config.db_path(), PathBuf::from("/var/lib/stock/stock.redb"));
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
