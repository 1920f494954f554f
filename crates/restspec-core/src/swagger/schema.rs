use serde::{Deserialize, Serialize};

/// Prefix of every reference into the document's `definitions` section.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A schema attached to a body parameter or a response.
///
/// Only references are emitted: the structure of the referenced definition
/// lives in the `definitions` map, which this crate does not populate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Schema {
    /// Build a `#/definitions/<name>` reference.
    pub fn definition(name: &str) -> Self {
        Self {
            ref_path: format!("{DEFINITIONS_PREFIX}{name}"),
        }
    }

    /// The definition key this schema points at, if it is a local definitions reference.
    pub fn definition_name(&self) -> Option<&str> {
        self.ref_path.strip_prefix(DEFINITIONS_PREFIX)
    }
}
