use crate::clients::sparql_client::{read_id_from_url, SparqlClient, SparqlError};
use crate::known_entities::EntitiesId;
use regex::Regex;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref ITEM_ID_REGEX: Regex = Regex::new(r"^Q\d+$").unwrap();
}

pub struct AirportQuery {
    pub client: SparqlClient,
    pub known_entities: EntitiesId,
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("sparql error: {0}")]
    SparqlError(#[from] SparqlError),
    #[error("No variable {0} in sparql result")]
    MissingVariable(String),
    #[error("{0} is not an item id")]
    InvalidId(String),
}

impl AirportQuery {
    pub fn new(
        endpoint: &str,
        cache_max_age: u64,
        known_entities: EntitiesId,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            client: SparqlClient::new(endpoint, cache_max_age)?,
            known_entities,
        })
    }

    /// Ids of all the items that are an instance of airport, in the order given by the service
    pub fn find_airports(&self) -> Result<Vec<String>, QueryError> {
        let items = self.client.select(
            &["?item"],
            &format!(
                "?item wdt:{instance_of} wd:{airport}.",
                instance_of = self.known_entities.properties.instance_of,
                airport = self.known_entities.items.airport,
            ),
        )?;

        items
            .iter()
            .map(|item| {
                let url = item
                    .get("item")
                    .ok_or_else(|| QueryError::MissingVariable("item".to_owned()))?;
                read_id_from_url(url)
                    .filter(|id| ITEM_ID_REGEX.is_match(id))
                    .ok_or_else(|| QueryError::InvalidId(url.to_owned()))
            })
            .collect()
    }
}
