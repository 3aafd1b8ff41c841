use anyhow::{anyhow, Result};
use leptos::document;

mod raw;

/// ID of an optional `<script type="application/toml">` element
/// that overrides the built-in configuration.
const CONFIG_ELEMENT_ID: &str = "parkar-config";

#[derive(Debug, Clone)]
pub struct Config {
    pub search: Search,
    pub map: MapSection,
}

#[derive(Debug, Clone)]
pub struct Search {
    pub placeholder: String,
    pub quick_cities: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MapSection {
    pub title: String,
    pub description: String,
}

impl Config {
    pub fn try_from_toml(toml_string: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml_string)?;
        Self::try_from(raw_config)
    }

    #[must_use]
    pub fn load_from_document_or_default() -> Self {
        let Some(cfg_string) = document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            log::info!("No configuration element found => load default configuration.");
            return Self::default();
        };
        match Self::try_from_toml(&cfg_string) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::error!("Invalid configuration => load default configuration: {err}");
                Self::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { search, map } = from;

        let search = search.unwrap_or_default();
        let default_search = raw::Search::default();
        let quick_cities = search
            .quick_cities
            .or(default_search.quick_cities)
            .unwrap_or_default();
        if quick_cities.is_empty() {
            return Err(anyhow!("At least one quick select city is required"));
        }
        if quick_cities.iter().any(|city| city.trim().is_empty()) {
            return Err(anyhow!("Quick select cities must not be blank"));
        }
        let search = Search {
            placeholder: search
                .placeholder
                .or(default_search.placeholder)
                .unwrap_or_default(),
            quick_cities,
        };

        let map = map.unwrap_or_default();
        let default_map = raw::Map::default();
        let map = MapSection {
            title: map.title.or(default_map.title).unwrap_or_default(),
            description: map
                .description
                .or(default_map.description)
                .unwrap_or_default(),
        };

        Ok(Self { search, map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let cfg = Config::default();
        assert_eq!(
            cfg.search.quick_cities,
            vec!["London", "Paris", "Berlin", "New York", "Los Angeles"]
        );
        assert_eq!(cfg.map.title, "Explore Parking Spots");
        assert!(cfg.search.placeholder.starts_with("Enter location"));
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let cfg = Config::try_from_toml(
            r#"
            [search]
            quick-cities = ["Hamburg"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.search.quick_cities, vec!["Hamburg"]);
        assert_eq!(cfg.search.placeholder, Config::default().search.placeholder);
        assert_eq!(cfg.map.title, "Explore Parking Spots");
    }

    #[test]
    fn empty_config() {
        let cfg = Config::try_from_toml("").unwrap();
        assert_eq!(cfg.search.quick_cities.len(), 5);
    }

    #[test]
    fn reject_empty_quick_cities() {
        assert!(Config::try_from_toml("[search]\nquick-cities = []").is_err());
        assert!(Config::try_from_toml("[search]\nquick-cities = [\" \"]").is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(Config::try_from_toml("[search\n").is_err());
    }
}
