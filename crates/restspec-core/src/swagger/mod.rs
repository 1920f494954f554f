pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod spec;

pub use operation::{HttpMethod, Operation, PathItem};
pub use parameter::{Parameter, ParameterLocation};
pub use response::{Response, Responses};
pub use schema::Schema;
pub use spec::{Paths, Swagger};

/// Serialize a Swagger document as pretty-printed JSON.
pub fn to_json(swagger: &Swagger) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(swagger)
}

/// Serialize a Swagger document as YAML.
pub fn to_yaml(swagger: &Swagger) -> Result<String, serde_yaml_ng::Error> {
    serde_yaml_ng::to_string(swagger)
}
