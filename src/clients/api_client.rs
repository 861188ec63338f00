use crate::clients::api_structures::*;
pub use crate::clients::api_error::ApiError;
use crate::entity;
use std::collections::HashMap;

/// Client of the wikibase action api, used to read the entities
pub struct ApiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Ok(ApiClient {
            client: super::http_client()?,
            endpoint: endpoint.to_owned(),
        })
    }

    fn get(&self) -> reqwest::blocking::RequestBuilder {
        self.client.get(&self.endpoint).query(&[("format", "json")])
    }

    /// fetch the claims and the sitelinks of an entity
    pub fn get_entity(&self, id: &str) -> Result<entity::Entity, ApiError> {
        let body = self
            .get()
            .query(&[
                ("action", "wbgetentities"),
                ("ids", id),
                ("props", "claims|sitelinks"),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        log::trace!("Response body: {:#?}", body);
        let mut res = serde_json::from_str::<EntityResponse>(&body)?;

        if let Some(err) = res.error {
            return Err(ApiError::RemoteError {
                code: err.code,
                info: err.info,
            });
        }

        let entities = &mut res.entities;
        let r = entities
            .remove(id)
            .or_else(|| {
                // a redirected entity can be listed under the id of its target
                if entities.len() == 1 {
                    entities.drain().next().map(|(_, e)| e)
                } else {
                    None
                }
            })
            .ok_or_else(|| {
                ApiError::GenericError(format!("invalid response format, no {} in response", id))
            })?;

        if r.missing.is_some() {
            return Err(ApiError::EntityNotFound(id.to_owned()));
        }

        Ok(entity::Entity {
            id: r.id,
            claims: r
                .claims
                .unwrap_or_default()
                .into_iter()
                .map(|(prop_id, claims)| {
                    let values = claims
                        .into_iter()
                        .map(|claim| property_value(&prop_id, claim.mainsnak.datavalue))
                        .collect::<Vec<_>>();
                    (prop_id, values)
                })
                .collect::<HashMap<_, _>>(),
            sitelinks: r
                .sitelinks
                .unwrap_or_default()
                .into_iter()
                .map(|(site, link)| (site, link.title))
                .collect(),
        })
    }
}

/// A value that cannot be read is kept as `Other`, it only matters if this property is used
fn property_value(property: &str, datavalue: Option<Datavalue>) -> entity::PropertyValue {
    let Datavalue { value_type, value } = match datavalue {
        Some(d) => d,
        None => return entity::PropertyValue::NoValue,
    };
    let parsed = match value_type.as_str() {
        "string" => serde_json::from_value(value).map(entity::PropertyValue::String),
        "wikibase-entityid" => serde_json::from_value::<ItemValue>(value)
            .map(|item| entity::PropertyValue::Item(item.id)),
        "globecoordinate" => serde_json::from_value::<GlobeCoordinate>(value).map(
            |coord| entity::PropertyValue::Coord {
                latitude: coord.latitude,
                longitude: coord.longitude,
            },
        ),
        _ => Ok(entity::PropertyValue::Other),
    };
    parsed.unwrap_or_else(|e| {
        log::debug!("invalid {} value for {}: {}", value_type, property, e);
        entity::PropertyValue::Other
    })
}
