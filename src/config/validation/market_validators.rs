//! Validators for the marketplace configuration structures

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for MarketConfig {
    fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.auth
            .rbac
            .validate()
            .map_err(|e| format!("RBAC config error: {}", e))?;
        self.listings
            .validate()
            .map_err(|e| format!("Listings config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.allows_all_origins() && self.allow_credentials {
                return Err("CORS cannot allow all origins (*) when credentials are enabled for security reasons".to_string());
            }

            if self.allows_all_origins() {
                warn!("CORS allows all origins. This may be insecure for production.");
            }
        }
        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        let header = self.role_header.trim();
        if header.is_empty() {
            return Err("Role header cannot be empty".to_string());
        }

        if !header
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(format!("Role header '{}' is not a valid header name", header));
        }

        Ok(())
    }
}

impl Validate for ListingsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_page_size == 0 {
            return Err("Max page size must be greater than 0".to_string());
        }

        if self.default_page_size == 0 {
            return Err("Default page size must be greater than 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            return Err(format!(
                "Default page size {} exceeds max page size {}",
                self.default_page_size, self.max_page_size
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
