pub mod client;
pub mod source;
pub mod types;

pub use client::RestCountriesClient;
pub use source::{CountrySource, FetchError, FetchMode, fetch};
pub use types::{RawCountry, RawCurrency, RawName};
