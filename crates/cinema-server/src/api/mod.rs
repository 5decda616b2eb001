pub mod directors;
pub mod genres;
pub mod movies;

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Deserialize an optional query value, treating `?key=` like an absent key.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
