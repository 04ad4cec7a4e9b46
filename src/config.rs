//! Loading component props from JSON.
//!
//! Props use the same camelCase keys as the override tables, so a stored
//! configuration reads like:
//!
//! ```json
//! {
//!   "text": "Link Button",
//!   "hoverColor": "#2b79d3",
//!   "responsive": { "xxs": { "width": "80px" } }
//! }
//! ```

use std::any::type_name;
use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::Result;

pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    tracing::debug!(target_type = type_name::<T>(), len = json.len(), "loading props");
    Ok(serde_json::from_str(json)?)
}

pub fn from_json_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    tracing::debug!(target_type = type_name::<T>(), "loading props from reader");
    Ok(serde_json::from_reader(reader)?)
}

pub fn from_json_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
