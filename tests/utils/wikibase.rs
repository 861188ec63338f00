//! A fake wikibase, serving the sparql and the api endpoints used by the dump
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const AIRPORTS_QUERY: &str = "SELECT ?item WHERE { ?item wdt:P31 wd:Q1248784. }";

pub struct FakeWikibase {
    pub server: ServerGuard,
}

/// Data of a served airport, only the given values are in the item
#[derive(Default)]
pub struct AirportData<'a> {
    pub iata: Option<&'a str>,
    pub icao: Option<&'a str>,
    pub enwiki: Option<&'a str>,
    pub coord: Option<(f64, f64)>,
    pub country: Option<&'a str>,
}

fn claim(prop: &str, datavalue: serde_json::Value) -> serde_json::Value {
    serde_json::json!([{
        "mainsnak": {"snaktype": "value", "property": prop, "datavalue": datavalue},
        "type": "statement",
        "rank": "normal"
    }])
}

impl FakeWikibase {
    pub fn new() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn api_endpoint(&self) -> String {
        format!("{}/w/api.php", self.server.url())
    }

    pub fn sparql_endpoint(&self) -> String {
        format!("{}/sparql", self.server.url())
    }

    /// the sparql service returns those items as instances of airport
    pub fn airports(&mut self, ids: &[&str]) -> Mock {
        let bindings: Vec<_> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "item": {"type": "uri", "value": format!("http://www.wikidata.org/entity/{}", id)}
                })
            })
            .collect();
        self.server
            .mock("GET", "/sparql")
            .match_query(Matcher::UrlEncoded("query".into(), AIRPORTS_QUERY.into()))
            .with_status(200)
            .with_header("content-type", "application/sparql-results+json")
            .with_body(
                serde_json::json!({
                    "head": {"vars": ["item"]},
                    "results": {"bindings": bindings}
                })
                .to_string(),
            )
            .create()
    }

    fn entity_response(&mut self, id: &str, entity: serde_json::Value) -> Mock {
        self.server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("action".into(), "wbgetentities".into()),
                Matcher::UrlEncoded("ids".into(), id.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "entities": { id: entity },
                    "success": 1
                })
                .to_string(),
            )
            .create()
    }

    pub fn airport(&mut self, id: &str, data: AirportData) -> Mock {
        let mut claims = serde_json::Map::new();
        if let Some(iata) = data.iata {
            claims.insert(
                "P238".to_owned(),
                claim("P238", serde_json::json!({"value": iata, "type": "string"})),
            );
        }
        if let Some(icao) = data.icao {
            claims.insert(
                "P239".to_owned(),
                claim("P239", serde_json::json!({"value": icao, "type": "string"})),
            );
        }
        if let Some((lat, lon)) = data.coord {
            claims.insert(
                "P625".to_owned(),
                claim(
                    "P625",
                    serde_json::json!({
                        "value": {"latitude": lat, "longitude": lon, "altitude": null,
                                  "precision": 0.0001, "globe": "http://www.wikidata.org/entity/Q2"},
                        "type": "globecoordinate"
                    }),
                ),
            );
        }
        if let Some(country) = data.country {
            claims.insert(
                "P17".to_owned(),
                claim(
                    "P17",
                    serde_json::json!({
                        "value": {"entity-type": "item", "id": country},
                        "type": "wikibase-entityid"
                    }),
                ),
            );
        }
        let mut sitelinks = serde_json::Map::new();
        if let Some(title) = data.enwiki {
            sitelinks.insert(
                "enwiki".to_owned(),
                serde_json::json!({"site": "enwiki", "title": title, "badges": []}),
            );
        }

        self.entity_response(
            id,
            serde_json::json!({
                "type": "item",
                "id": id,
                "claims": claims,
                "sitelinks": sitelinks
            }),
        )
    }

    pub fn missing(&mut self, id: &str) -> Mock {
        self.entity_response(id, serde_json::json!({"id": id, "missing": ""}))
    }
}
