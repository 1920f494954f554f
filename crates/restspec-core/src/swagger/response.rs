use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// The responses of an operation: one entry per status code plus an optional
/// `default` slot.
///
/// Serialized as a single map, `default` first, then status codes in
/// ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    into = "IndexMap<String, Response>",
    try_from = "IndexMap<String, Response>"
)]
pub struct Responses {
    pub default: Option<Response>,
    pub status_codes: BTreeMap<u16, Response>,
}

impl Responses {
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.status_codes.is_empty()
    }

    pub fn get(&self, code: u16) -> Option<&Response> {
        self.status_codes.get(&code)
    }
}

impl From<Responses> for IndexMap<String, Response> {
    fn from(responses: Responses) -> Self {
        let mut map = IndexMap::new();
        if let Some(default) = responses.default {
            map.insert("default".to_string(), default);
        }
        for (code, response) in responses.status_codes {
            map.insert(code.to_string(), response);
        }
        map
    }
}

impl TryFrom<IndexMap<String, Response>> for Responses {
    type Error = String;

    fn try_from(map: IndexMap<String, Response>) -> Result<Self, Self::Error> {
        let mut responses = Responses::default();
        for (key, response) in map {
            if key == "default" {
                responses.default = Some(response);
                continue;
            }
            let code: u16 = key
                .parse()
                .map_err(|_| format!("invalid response status code: {key}"))?;
            responses.status_codes.insert(code, response);
        }
        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> Response {
        Response {
            description: "ok".to_string(),
            schema: Some(Schema::definition("models.Sample")),
        }
    }

    #[test]
    fn test_serialize_default_first() {
        let mut responses = Responses::default();
        responses.status_codes.insert(500, Response {
            description: "boom".to_string(),
            schema: None,
        });
        responses.status_codes.insert(200, ok());
        responses.default = Some(ok());

        let json = serde_json::to_string(&responses).unwrap();
        let default_at = json.find("\"default\"").unwrap();
        let ok_at = json.find("\"200\"").unwrap();
        let err_at = json.find("\"500\"").unwrap();
        assert!(default_at < ok_at && ok_at < err_at, "{json}");
    }

    #[test]
    fn test_deserialize_map() {
        let json = r##"{
            "default": { "description": "ok", "schema": { "$ref": "#/definitions/models.Sample" } },
            "404": { "description": "missing" }
        }"##;
        let responses: Responses = serde_json::from_str(json).unwrap();
        assert_eq!(responses.default, Some(ok()));
        assert_eq!(responses.get(404).unwrap().description, "missing");
        assert!(responses.get(404).unwrap().schema.is_none());
    }

    #[test]
    fn test_deserialize_rejects_bad_code() {
        let json = r#"{ "2xx": { "description": "ranged" } }"#;
        assert!(serde_json::from_str::<Responses>(json).is_err());
    }
}
