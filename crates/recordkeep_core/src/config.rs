//! Run configuration for the scenario runner.
//!
//! # Invariants
//! - Every file path is derived from `data_dir`; no other path input exists.

use crate::logging::{default_log_level, normalize_level, LogTarget};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";
const INVENTORY_LOG_FILE: &str = "inventory_log.json";
const STUDENTS_FILE: &str = "students.txt";
const GRADES_FILE: &str = "grades.txt";
const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub log_target: LogTarget,
    /// Products below this quantity are reported as low stock.
    pub low_stock_threshold: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: default_log_level().to_string(),
            log_target: LogTarget::Stderr,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl RunConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Checks that the configuration can be used as-is.
    pub fn validate(&self) -> Result<(), String> {
        if self.data_dir.as_os_str().is_empty() {
            return Err("data_dir cannot be empty".to_string());
        }
        normalize_level(&self.log_level)?;
        if self.low_stock_threshold < 0 {
            return Err(format!(
                "low_stock_threshold must not be negative, got {}",
                self.low_stock_threshold
            ));
        }
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn inventory_log_path(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_LOG_FILE)
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE)
    }

    pub fn grades_path(&self) -> PathBuf {
        self.data_dir.join(GRADES_FILE)
    }
}
