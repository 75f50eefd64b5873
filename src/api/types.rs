//! # REST Countries Wire Types
//!
//! Serde mirrors of the `restcountries.com/v3.1` payload. Only the fields the
//! normalizer reads are modelled; everything else in the upstream document is
//! ignored.
//!
//! Fields the normalizer requires are still `Option`s here so a
//! missing field surfaces as a [`NormalizeError`](crate::core::country::NormalizeError)
//! instead of failing the whole response parse.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One country as returned by the provider.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCountry {
    /// ISO 3166-1 alpha-3 code, used as the display record id.
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub name: Option<RawName>,
    #[serde(default)]
    pub continents: Option<Vec<String>>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    /// Currency code → details, in document order.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub currencies: Vec<(String, RawCurrency)>,
    /// Language code → language name, in document order.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub languages: Vec<(String, String)>,
    #[serde(default)]
    pub maps: RawMaps,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub flags: RawFlags,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawName {
    pub common: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCurrency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawMaps {
    #[serde(rename = "googleMaps", default)]
    pub google_maps: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawFlags {
    #[serde(default)]
    pub png: String,
}

/// Deserializes a JSON object into its entries, keeping document order.
///
/// `null` is accepted and yields no entries.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, V>()? {
                entries.push(entry);
            }
            Ok(entries)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(EntriesVisitor(PhantomData))
}
