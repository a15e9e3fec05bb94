use dotenvy::dotenv;
use std::env;

/// Client configuration, passed explicitly wherever it is needed.
/// Library code never reads the process environment on its own.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: String,
    pub location: String,
    pub catalog: String,
    pub serving_config: String,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            project_id: "explore-retail-search-api".to_string(),
            location: "global".to_string(),
            catalog: "default_catalog".to_string(),
            serving_config: "default_search".to_string(),
            endpoint: "https://retail.googleapis.com".to_string(),
        }
    }
}

impl Config {
    /// Build a Config from RETAIL_* environment variables, falling back to
    /// the demo defaults. Meant for the binary; tests construct Config
    /// directly.
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        let defaults = Config::default();
        Config {
            project_id: get_env_or_default("RETAIL_PROJECT_ID", &defaults.project_id),
            location: get_env_or_default("RETAIL_LOCATION", &defaults.location),
            catalog: get_env_or_default("RETAIL_CATALOG", &defaults.catalog),
            serving_config: get_env_or_default("RETAIL_SERVING_CONFIG", &defaults.serving_config),
            endpoint: get_env_or_default("RETAIL_ENDPOINT", &defaults.endpoint),
        }
    }

    /// Resource path of the serving config queries are routed through.
    pub fn default_search_placement(&self) -> String {
        format!(
            "projects/{}/locations/{}/catalogs/{}/placements/{}",
            self.project_id, self.location, self.catalog, self.serving_config
        )
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[test]
fn test_default_search_placement() {
    let config = Config::default();
    assert_eq!(
        config.default_search_placement(),
        "projects/explore-retail-search-api/locations/global/catalogs/default_catalog/placements/default_search"
    );

    let config = Config {
        project_id: "my-project".to_string(),
        location: "us".to_string(),
        catalog: "catalog_b".to_string(),
        serving_config: "recently_ordered".to_string(),
        ..Config::default()
    };
    assert_eq!(
        config.default_search_placement(),
        "projects/my-project/locations/us/catalogs/catalog_b/placements/recently_ordered"
    );
}
