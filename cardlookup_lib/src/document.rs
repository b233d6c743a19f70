//! Read-only view over one fetched card object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use scryfall_api::Error;

/// A complete, unmodified JSON object returned by one successful fetch.
///
/// Every accessor treats a missing key and an explicit JSON `null` the same
/// way: both come back as `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Returns `document[key]`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Returns `document[key]`, or `document[key][sub_key]` when `sub_key` is given.
    ///
    /// Absent if `key` is missing or null, or if `sub_key` is given and
    /// `document[key]` is not an object containing a non-null `sub_key`.
    pub fn get_field(&self, key: &str, sub_key: Option<&str>) -> Option<&Value> {
        match sub_key {
            Some(sub_key) => self.get_path(&[key, sub_key]),
            None => self.get(key),
        }
    }

    /// Walks nested objects along `path`. An empty path yields `None`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            current = current.as_object()?.get(*key).filter(|v| !v.is_null())?;
        }
        Some(current)
    }

    /// String value at `key`, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(Error::NotAnObject),
        }
    }
}
