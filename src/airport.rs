//! The airport record and its text serialization
//!
//! An airport is written as one line, its fields joined by `;` in a fixed order:
//! `iata;icao;en;geo` followed by the enabled optional fields (`;country`).
//! Absent values are written as empty strings.
//!
//! Values are not escaped: a `;` or a newline inside a value corrupts the line.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const SEPARATOR: &str = ";";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Airport {
    pub iata: Option<String>,
    pub icao: Option<String>,
    /// title of the english wikipedia article
    pub en: Option<String>,
    /// "<lat>, <lon>", see `format_geo`
    pub geo: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Iata,
    Icao,
    En,
    Geo,
    Country,
}

/// The fields that are only written when enabled in the schema
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OptionalField {
    Country,
}

impl From<OptionalField> for Field {
    fn from(f: OptionalField) -> Self {
        match f {
            OptionalField::Country => Field::Country,
        }
    }
}

const MANDATORY_FIELDS: [Field; 4] = [Field::Iata, Field::Icao, Field::En, Field::Geo];
const OPTIONAL_FIELDS: [OptionalField; 1] = [OptionalField::Country];

/// Shape of the output lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    optional: Vec<OptionalField>,
}

impl Schema {
    pub fn new(optional: &[OptionalField]) -> Self {
        // the order of the optional fields does not depend on the order they are given in
        Self {
            optional: OPTIONAL_FIELDS
                .iter()
                .copied()
                .filter(|f| optional.contains(f))
                .collect(),
        }
    }

    /// `iata;icao;en;geo`
    pub fn basic() -> Self {
        Self::new(&[])
    }

    /// `iata;icao;en;geo;country`
    pub fn with_country() -> Self {
        Self::new(&[OptionalField::Country])
    }

    pub fn has(&self, field: OptionalField) -> bool {
        self.optional.contains(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        MANDATORY_FIELDS
            .iter()
            .copied()
            .chain(self.optional.iter().map(|&f| f.into()))
    }
}

impl Airport {
    pub fn value(&self, field: Field) -> &str {
        let v = match field {
            Field::Iata => &self.iata,
            Field::Icao => &self.icao,
            Field::En => &self.en,
            Field::Geo => return &self.geo,
            Field::Country => &self.country,
        };
        v.as_deref().unwrap_or("")
    }

    /// Serialize the airport, without the line terminator
    pub fn to_line(&self, schema: &Schema) -> String {
        schema
            .fields()
            .map(|f| self.value(f))
            .join(SEPARATOR)
    }
}

/// Format a coordinate as "<lat>, <lon>"
///
/// Without coordinate both parts are empty, but the ", " is still there.
pub fn format_geo(coord: Option<(f64, f64)>) -> String {
    match coord {
        Some((lat, lon)) => format!("{}, {}", format_degree(lat), format_degree(lon)),
        None => ", ".to_owned(),
    }
}

const SIGNIFICANT_DIGITS: i32 = 12;

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format a degree value the way the previous dumps did:
/// 12 significant digits, `.0` kept on integral values (`2.0`, `-0.0`),
/// exponent notation below 1e-4 and from 1e12 (`1e-05`)
pub fn format_degree(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    // the exponent after rounding to the significant digits
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let fixed = format!("{:.*}", (SIGNIFICANT_DIGITS - 1 - exp) as usize, v);
        let trimmed = trim_fraction(&fixed);
        if trimmed.contains('.') {
            trimmed.to_owned()
        } else {
            format!("{}.0", trimmed)
        }
    }
}
