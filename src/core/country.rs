//! # Country Display Records
//!
//! The normalizer: a pure mapping from provider records to the fixed shape
//! the list renders.
//!
//! ```text
//! RawCountry ──normalize()──▶ Country
//!   name.common               name
//!   continents[]              "Europe, Asia"
//!   capital[0] | none         "Paris" | "N/A"
//!   currencies{first}         "Euro (€)"
//!   languages{first}          "French"
//!   population                "67,391,582"
//!   maps.googleMaps           location (verbatim)
//!   flags.png                 flag (verbatim)
//! ```
//!
//! Records missing a required field fail the whole batch. The caller treats
//! that exactly like a failed fetch.

use std::fmt;

use crate::api::RawCountry;

/// Shown when a country has no capital.
pub const CAPITAL_PLACEHOLDER: &str = "N/A";

/// Flattened per-country record rendered in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub continents: String,
    pub capital: String,
    pub currency: String,
    pub language: String,
    pub location: String,
    pub population: String,
    pub flag: String,
}

/// Locale conventions applied while normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Inserted between groups of three digits.
    pub digit_separator: char,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self { digit_separator: ',' }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A field the display record cannot do without was absent or empty.
    MissingField { id: String, field: &'static str },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MissingField { id, field } => {
                write!(f, "country {id:?} is missing required field '{field}'")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Normalizes every record, failing on the first one that cannot be displayed.
pub fn normalize(raw: &[RawCountry], format: &DisplayFormat) -> Result<Vec<Country>, NormalizeError> {
    raw.iter().map(|country| normalize_one(country, format)).collect()
}

pub fn normalize_one(raw: &RawCountry, format: &DisplayFormat) -> Result<Country, NormalizeError> {
    let missing = |field: &'static str| NormalizeError::MissingField {
        id: raw.cca3.clone(),
        field,
    };

    let name = raw.name.as_ref().ok_or_else(|| missing("name"))?.common.clone();
    let continents = raw
        .continents
        .as_ref()
        .ok_or_else(|| missing("continents"))?
        .join(", ");
    let capital = raw
        .capital
        .as_ref()
        .and_then(|capitals| capitals.first())
        .cloned()
        .unwrap_or_else(|| CAPITAL_PLACEHOLDER.to_string());
    let currency = raw
        .currencies
        .first()
        .map(|(_, currency)| format!("{} ({})", currency.name, currency.symbol))
        .ok_or_else(|| missing("currencies"))?;
    let language = raw
        .languages
        .first()
        .map(|(_, language)| language.clone())
        .ok_or_else(|| missing("languages"))?;
    let population = raw
        .population
        .map(|n| group_digits(n, format.digit_separator))
        .ok_or_else(|| missing("population"))?;

    Ok(Country {
        id: raw.cca3.clone(),
        name,
        continents,
        capital,
        currency,
        language,
        location: raw.maps.google_maps.clone(),
        population,
        flag: raw.flags.png.clone(),
    })
}

/// Formats `n` with `separator` between every group of three digits.
pub fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Encyclopedia page for a country, `prefix` followed by the display name.
///
/// The name is not percent-encoded.
pub fn encyclopedia_url(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}
