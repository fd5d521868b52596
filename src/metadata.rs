use crate::error::{bug, Bug};
use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Meta key overriding the name of a struct field
pub const FIELD_NAME_KEY: &str = "struct:field:name";

/// Meta key holding the protocol buffer field number
pub const RPC_TAG_KEY: &str = "rpc:tag";

/// Meta is the ordered list of key => values attached to an attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(LinkedHashMap<String, Vec<String>>);

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values associated with the key, replacing existing ones
    pub fn insert<K: Into<String>>(&mut self, key: K, values: Vec<String>) {
        self.0.insert(key.into(), values);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the first value associated with the key
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The field name override, if any
    pub fn field_name(&self) -> Option<&str> {
        self.first(FIELD_NAME_KEY)
    }

    /// Parse the field number if one is set
    pub fn rpc_tag(&self) -> Result<Option<u64>, Bug> {
        match self.first(RPC_TAG_KEY) {
            None => Ok(None),
            Some(value) => value
                .parse::<u64>()
                .map(Some)
                .map_err(|source| Bug::InvalidTag {
                    value: value.to_string(),
                    source,
                }),
        }
    }
}

/// Returns the field number of the named field.
/// Tags are validated before lowering so a missing or malformed tag is a bug.
pub fn rpc_tag(field_name: &str, meta: &Meta) -> u64 {
    match meta.rpc_tag() {
        Ok(Some(tag)) => tag,
        Ok(None) => bug(Bug::MissingTag(field_name.to_string())),
        Err(err) => bug(err),
    }
}
