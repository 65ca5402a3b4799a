//! Build-time Configuration
//!
//! Values come from the environment at compile time (`build.rs` forwards a
//! `.env` file when present), falling back to local development defaults.

use leaflet_map::{LatLng, TileSource};

/// Base URL of the collection-point API
pub const API_BASE_URL: &str = match option_env!("COLETA_API_URL") {
    Some(url) => url,
    None => "http://localhost:3333",
};

/// Join the API base and an endpoint path with exactly one slash
pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Initial view of the map on the create-location page
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub tiles: TileSource,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(-29.950121197917433, -51.08301615719939),
            zoom: 14.0,
            tiles: TileSource::openstreetmap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3333", "items"), "http://localhost:3333/items");
        assert_eq!(join_url("http://localhost:3333/", "/locations"), "http://localhost:3333/locations");
        assert_eq!(join_url("https://api.example.org/v1", "items"), "https://api.example.org/v1/items");
    }

    #[test]
    fn test_api_url_has_single_separator() {
        let url = api_url("items");
        assert!(url.ends_with("/items"));
        assert!(!url.ends_with("//items"));
    }

    #[test]
    fn test_default_map_config() {
        let config = MapConfig::default();
        assert_eq!(config.zoom, 14.0);
        assert!(config.center.lat < 0.0 && config.center.lng < 0.0);
    }
}
