//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use estate_hub::config::loader::{ENV_LISTINGS_SEED, ENV_PORT, ENV_RBAC_DIAGNOSTICS};
    use estate_hub::config::{Config, MarketConfig};
    use estate_hub::{ListingCatalog, MarketError, PermissionTable};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_partial_file_keeps_defaults() {
        let file = write_temp(
            r#"
server:
  port: 9090
auth:
  rbac:
    diagnostics: true
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 9090);
        assert_eq!(config.server().host, "0.0.0.0");
        assert!(config.rbac().diagnostics);
        assert_eq!(config.rbac().role_header, "x-user-role");
        assert_eq!(config.listings().default_page_size, 12);
    }

    #[tokio::test]
    async fn test_invalid_file_is_config_error() {
        let file = write_temp(
            r#"
listings:
  default_page_size: 500
  max_page_size: 100
"#,
        );

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, MarketError::Config(_)));
        assert!(err.to_string().contains("Listings config error"));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_config_error() {
        let file = write_temp("server: [not, a, map");
        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(MarketError::Config(_))));
    }

    #[test]
    fn test_overrides_feed_the_table_and_catalog_settings() {
        let vars: HashMap<&str, &str> = [
            (ENV_PORT, "7070"),
            (ENV_RBAC_DIAGNOSTICS, "yes"),
            (ENV_LISTINGS_SEED, "/srv/listings.json"),
        ]
        .into_iter()
        .collect();

        let app = MarketConfig::default()
            .with_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(app.server.port, 7070);
        assert_eq!(
            app.listings.seed_file.as_deref(),
            Some(std::path::Path::new("/srv/listings.json"))
        );

        let table = PermissionTable::from_config(&app.auth.rbac);
        assert!(table.has_observer());
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let result = MarketConfig::default().with_overrides(|name| {
            (name == ENV_RBAC_DIAGNOSTICS).then(|| "sometimes".to_string())
        });
        assert!(matches!(result, Err(MarketError::Config(_))));
    }

    #[tokio::test]
    async fn test_example_config_and_seed_load() {
        let root = env!("CARGO_MANIFEST_DIR");
        let config = Config::from_file(format!("{}/config/estate.example.yaml", root))
            .await
            .unwrap();
        assert_eq!(config.listings().max_page_size, 100);

        let catalog =
            ListingCatalog::load_from_file(format!("{}/config/listings.example.json", root))
                .await
                .unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.server().port, config.server().port);
        assert_eq!(parsed.rbac().role_header, config.rbac().role_header);
    }
}
