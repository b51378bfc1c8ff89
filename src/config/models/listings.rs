//! Listing catalog configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Listing catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsConfig {
    /// JSON file with listings loaded at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// Page size when the request does not name one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Largest page size a request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ListingsConfig {
    /// Merge listing configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.seed_file.is_some() {
            self.seed_file = other.seed_file;
        }
        if other.default_page_size != default_page_size() {
            self.default_page_size = other.default_page_size;
        }
        if other.max_page_size != default_max_page_size() {
            self.max_page_size = other.max_page_size;
        }
        self
    }
}
