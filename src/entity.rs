use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Item(String),
    Coord { latitude: f64, longitude: f64 },
    /// A value of a datatype we do not read (time, quantity, monolingual text...)
    Other,
    /// `somevalue` or `novalue` snak, without any datavalue
    NoValue,
}

impl PropertyValue {
    /// Textual value of the claim, the id for an item
    /// `None` for the coordinates and the values we cannot display
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            PropertyValue::Item(id) => Some(id),
            _ => None,
        }
    }
}

/// Simple representation of a wikibase entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub id: String,
    /// all the claims values of a property, in the order given by the api
    pub claims: HashMap<String, Vec<PropertyValue>>,
    /// title of the linked page for each site (`enwiki`, `frwiki`, ...)
    pub sitelinks: HashMap<String, String>,
}

impl Entity {
    /// Value of the first claim of a property.
    ///
    /// Only the first claim is considered, whatever the rank or the qualifiers
    /// of the other claims. `None` if the entity has no claim for this property.
    pub fn first_value(&self, property: &str) -> Option<&PropertyValue> {
        self.claims.get(property).and_then(|values| values.first())
    }

    pub fn sitelink(&self, site: &str) -> Option<&str> {
        self.sitelinks.get(site).map(|title| title.as_str())
    }
}
