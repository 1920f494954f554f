use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::model::ModelType;
use super::parameter::ParameterSpec;
use crate::swagger::HttpMethod;

/// Route metadata key whose value, a list of strings, becomes the operation's tags.
pub const KEY_OPENAPI_TAGS: &str = "openapi.tags";

/// A documented response of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    pub message: String,
    pub model: Option<ModelType>,
}

/// A registered route, as seen by the document builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteRecord {
    /// Full path template, service root included.
    pub path: String,
    /// Method as registered; may name a method without a path-item slot.
    pub method: String,
    pub operation: String,
    pub doc: String,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub parameters: Vec<ParameterSpec>,
    pub responses: BTreeMap<u16, ResponseSpec>,
    pub metadata: IndexMap<String, serde_json::Value>,
}

/// Result of looking up [`KEY_OPENAPI_TAGS`] in a route's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    Absent,
    /// The key is present but its value is not a list of strings.
    WrongShape,
    Tags(Vec<String>),
}

impl RouteRecord {
    pub fn http_method(&self) -> Option<HttpMethod> {
        HttpMethod::from_name(&self.method)
    }

    pub fn openapi_tags(&self) -> TagLookup {
        match self.metadata.get(KEY_OPENAPI_TAGS) {
            None => TagLookup::Absent,
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map_or(TagLookup::WrongShape, TagLookup::Tags),
            Some(_) => TagLookup::WrongShape,
        }
    }
}
