use crate::airport::Schema;
use crate::airport_query::AirportQuery;
use crate::clients::ApiClient;
use crate::config::Config;
use crate::entity::Entity;
use crate::extractor::extract_airport;
use crate::known_entities::EntitiesId;
use anyhow::{Context, Error};
use log::{debug, info};
use std::io::Write;

/// The remote knowledge base the airports are read from
pub trait KnowledgeBase {
    /// ids of all the airport items
    fn airport_ids(&self) -> Result<Vec<String>, Error>;
    /// fetch an item by its id
    fn item(&self, id: &str) -> Result<Entity, Error>;
}

/// Wikibase instance, queried with sparql and read with the action api
pub struct WikidataClient {
    pub query: AirportQuery,
    pub api: ApiClient,
}

impl WikidataClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            query: AirportQuery::new(
                &config.sparql_endpoint,
                config.cache_max_age,
                config.known_entities.clone(),
            )
            .context("impossible to create query client")?,
            api: ApiClient::new(&config.api_endpoint).context("impossible to create api client")?,
        })
    }
}

impl KnowledgeBase for WikidataClient {
    fn airport_ids(&self) -> Result<Vec<String>, Error> {
        Ok(self.query.find_airports()?)
    }

    fn item(&self, id: &str) -> Result<Entity, Error> {
        Ok(self.api.get_entity(id)?)
    }
}

pub struct AirportDumper {
    pub known_entities: EntitiesId,
    pub schema: Schema,
    pub sitelink: String,
}

impl AirportDumper {
    pub fn new(config: &Config) -> Self {
        Self {
            known_entities: config.known_entities.clone(),
            schema: config.schema(),
            sitelink: config.sitelink.clone(),
        }
    }

    /// Write one line per airport in `output`
    ///
    /// Each line is flushed as soon as it is written. The first error stops the dump,
    /// the lines already written are kept.
    /// Returns the number of written airports.
    pub fn dump<W: Write>(
        &self,
        knowledge_base: &dyn KnowledgeBase,
        output: &mut W,
    ) -> Result<usize, Error> {
        info!("dump airports, version {}", crate::GIT_VERSION);
        let ids = knowledge_base
            .airport_ids()
            .context("impossible to query the airports")?;
        info!(
            "Found {} items instance of {} (wd:{})",
            ids.len(),
            self.known_entities.properties.instance_of,
            self.known_entities.items.airport
        );

        for (i, id) in ids.iter().enumerate() {
            let item = knowledge_base
                .item(id)
                .with_context(|| format!("impossible to fetch item {}", id))?;
            let airport = extract_airport(&item, &self.known_entities, &self.sitelink);
            debug!("[{}/{}] {}: {:?}", i + 1, ids.len(), id, airport);

            writeln!(output, "{}", airport.to_line(&self.schema))
                .and_then(|_| output.flush())
                .with_context(|| format!("impossible to write airport {}", id))?;
        }
        info!("{} airports written", ids.len());
        Ok(ids.len())
    }
}
