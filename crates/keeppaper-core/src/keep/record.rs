//! Minimal Google Keep note structures, as exported by Takeout.
//!
//! Every field is lenient: a missing key or an explicit `null` decodes to the
//! field's empty default instead of failing the whole file.

use serde::{Deserialize, Deserializer};

/// Annotation `source` value for web links.
pub const WEBLINK_SOURCE: &str = "WEBLINK";

/// One decoded note file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_trashed: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Vec<RawAnnotation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<RawLabel>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAnnotation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLabel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
