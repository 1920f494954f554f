use serde::{Deserialize, Serialize};

/// Where a route parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Path,
    Query,
    Header,
    Form,
    Body,
}

/// A parameter as documented at route registration.
///
/// For [`ParameterKind::Body`], `data_type` holds the payload's definition key
/// rather than a primitive type name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub kind: ParameterKind,
    pub name: String,
    pub description: String,
    pub required: bool,
    pub data_type: String,
    pub data_format: String,
    pub default_value: Option<serde_json::Value>,
}

impl ParameterSpec {
    fn new(kind: ParameterKind, name: &str, description: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            required: false,
            data_type: "string".to_string(),
            data_format: String::new(),
            default_value: None,
        }
    }

    /// A path variable. Path variables are always required.
    pub fn path(name: &str, description: &str) -> Self {
        Self::new(ParameterKind::Path, name, description).required(true)
    }

    pub fn query(name: &str, description: &str) -> Self {
        Self::new(ParameterKind::Query, name, description)
    }

    pub fn header(name: &str, description: &str) -> Self {
        Self::new(ParameterKind::Header, name, description)
    }

    pub fn form(name: &str, description: &str) -> Self {
        Self::new(ParameterKind::Form, name, description)
    }

    /// A request body; set its definition key with [`ParameterSpec::data_type`].
    pub fn body(name: &str, description: &str) -> Self {
        let mut spec = Self::new(ParameterKind::Body, name, description);
        spec.data_type.clear();
        spec
    }

    pub fn data_type(mut self, data_type: &str) -> Self {
        self.data_type = data_type.to_string();
        self
    }

    pub fn data_format(mut self, format: &str) -> Self {
        self.data_format = format.to_string();
        self
    }

    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_required_string() {
        let p = ParameterSpec::path("id", "identifier");
        assert_eq!(p.kind, ParameterKind::Path);
        assert!(p.required);
        assert_eq!(p.data_type, "string");
        assert!(p.default_value.is_none());
    }

    #[test]
    fn test_query_is_optional() {
        let p = ParameterSpec::query("q", "search")
            .data_type("integer")
            .data_format("int32")
            .default_value(10);
        assert!(!p.required);
        assert_eq!(p.data_type, "integer");
        assert_eq!(p.data_format, "int32");
        assert_eq!(p.default_value, Some(serde_json::json!(10)));
    }

    #[test]
    fn test_body_has_no_primitive_type() {
        let p = ParameterSpec::body("body", "payload");
        assert_eq!(p.kind, ParameterKind::Body);
        assert!(p.data_type.is_empty());
    }
}
