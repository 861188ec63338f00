use serde::{Deserialize, Serialize};

/// Ids of the wikibase entities needed to find and describe the airports
/// The defaults are the wikidata ids
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EntitiesId {
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub items: Items,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Properties {
    /// Type of the entity
    pub instance_of: String,
    /// IATA airport code https://www.wikidata.org/wiki/Property:P238
    pub iata_code: String,
    /// ICAO airport code https://www.wikidata.org/wiki/Property:P239
    pub icao_code: String,
    /// The coordinate of an entity
    pub coordinate_location: String,
    pub country: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Items {
    /// https://www.wikidata.org/wiki/Q1248784
    pub airport: String,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            instance_of: "P31".to_owned(),
            iata_code: "P238".to_owned(),
            icao_code: "P239".to_owned(),
            coordinate_location: "P625".to_owned(),
            country: "P17".to_owned(),
        }
    }
}

impl Default for Items {
    fn default() -> Self {
        Self {
            airport: "Q1248784".to_owned(),
        }
    }
}
