use itertools::Itertools;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparqlError {
    #[error("Impossible to query: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Invalid json: {0}")]
    InvalidJsonError(#[from] serde_json::Error),
    #[error("Invalid sparql response: {0}")]
    InvalidResponse(String),
}

pub fn read_id_from_url(url: &str) -> Option<String> {
    url.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
}

pub struct SparqlClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    cache_max_age: u64,
}

impl SparqlClient {
    /// `cache_max_age` (in seconds) is the age of the cached results the service is allowed to give us
    pub fn new(endpoint: &str, cache_max_age: u64) -> Result<Self, SparqlError> {
        Ok(Self {
            client: super::http_client()?,
            endpoint: endpoint.to_owned(),
            cache_max_age,
        })
    }

    fn query(&self, query: &str) -> Result<serde_json::Value, SparqlError> {
        log::debug!("Sparql query: {}", query);
        let response = self
            .client
            .get(&self.endpoint)
            .header(
                reqwest::header::CACHE_CONTROL,
                format!("max-age={}", self.cache_max_age),
            )
            .query(&[("format", "json"), ("query", query)])
            .send()?
            .error_for_status()?
            .text()?;
        log::trace!("Query response: {:?}", response);
        Ok(serde_json::from_str(&response)?)
    }

    /// Run a SELECT query, each result is a map variable name => value
    /// Unbound variables are missing from the map
    pub fn select(
        &self,
        variables: &[&str],
        where_clause: &str,
    ) -> Result<Vec<HashMap<String, String>>, SparqlError> {
        let vars = variables.iter().format(" ");
        let query = format!("SELECT {} WHERE {{ {} }}", vars, where_clause);
        let res = self.query(&query)?;

        let bindings = res
            .pointer("/results/bindings")
            .and_then(|b| b.as_array())
            .ok_or_else(|| SparqlError::InvalidResponse("no results.bindings".to_owned()))?;

        bindings
            .iter()
            .map(|binding| {
                binding
                    .as_object()
                    .map(|values| {
                        values
                            .iter()
                            .map(|(k, v)| {
                                (k.to_string(), v["value"].as_str().unwrap_or("").to_owned())
                            })
                            .collect::<HashMap<_, _>>()
                    })
                    .ok_or_else(|| {
                        SparqlError::InvalidResponse(format!("invalid binding {}", binding))
                    })
            })
            .collect()
    }
}
