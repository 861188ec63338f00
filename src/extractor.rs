use crate::airport::{format_geo, Airport};
use crate::entity::{Entity, PropertyValue};
use crate::known_entities::EntitiesId;

/// Textual value of the first claim of the property
fn first_text(item: &Entity, property: &str) -> Option<String> {
    item.first_value(property)
        .and_then(|v| v.as_text())
        .map(|v| v.to_owned())
}

/// Build the airport record of an item
/// Missing data never makes the extraction fail, the fields are just left empty
pub fn extract_airport(item: &Entity, known_entities: &EntitiesId, sitelink: &str) -> Airport {
    let properties = &known_entities.properties;
    let coord = match item.first_value(&properties.coordinate_location) {
        Some(PropertyValue::Coord {
            latitude,
            longitude,
        }) => Some((*latitude, *longitude)),
        _ => None,
    };

    Airport {
        iata: first_text(item, &properties.iata_code),
        icao: first_text(item, &properties.icao_code),
        en: item.sitelink(sitelink).map(|title| title.to_owned()),
        geo: format_geo(coord),
        country: first_text(item, &properties.country),
    }
}
