use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug)]
pub struct EntityResponse {
    #[serde(default)]
    pub entities: HashMap<String, Entity>,
    pub error: Option<Error>,
}

#[derive(Deserialize, Debug)]
pub struct Error {
    pub code: String,
    pub info: String,
}

/// The value is kept raw, its shape depends on `type`
#[derive(Deserialize, Debug)]
pub struct Datavalue {
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: serde_json::Value,
}

#[derive(Deserialize, Debug)]
pub struct Snak {
    pub datavalue: Option<Datavalue>,
}

#[derive(Deserialize, Debug)]
pub struct Claim {
    pub mainsnak: Snak,
}

#[derive(Deserialize, Debug)]
pub struct Sitelink {
    pub title: String,
}

#[derive(Deserialize, Debug)]
pub struct Entity {
    pub id: String,
    pub missing: Option<String>,
    pub claims: Option<HashMap<String, Vec<Claim>>>,
    pub sitelinks: Option<HashMap<String, Sitelink>>,
}

#[derive(Deserialize, Debug)]
pub struct ItemValue {
    pub id: String,
}

#[derive(Deserialize, Debug)]
pub struct GlobeCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}
