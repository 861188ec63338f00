use crate::airport::{OptionalField, Schema};
use crate::known_entities::EntitiesId;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";
pub const WIKIDATA_SPARQL: &str = "https://query.wikidata.org/sparql";

/// Configuration of a dump, every field can be omitted in the configuration file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Endpoint of the wikibase api
    pub api_endpoint: String,
    /// Endpoint of the sparql query service
    pub sparql_endpoint: String,
    /// Maximum age (in seconds) of the cached query results
    pub cache_max_age: u64,
    /// Site of the article title written for each airport
    pub sitelink: String,
    /// Fields written after the geo field
    pub optional_fields: Vec<OptionalField>,
    #[serde(flatten)]
    pub known_entities: EntitiesId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: WIKIDATA_API.to_owned(),
            sparql_endpoint: WIKIDATA_SPARQL.to_owned(),
            cache_max_age: 600,
            sitelink: "enwiki".to_owned(),
            optional_fields: vec![OptionalField::Country],
            known_entities: EntitiesId::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("impossible to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn schema(&self) -> Schema {
        Schema::new(&self.optional_fields)
    }
}
