use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::RouteSource;
use super::model::{DefinitionNamer, ModelType, TypeNamer};
use super::parameter::ParameterSpec;
use super::record::{KEY_OPENAPI_TAGS, ResponseSpec, RouteRecord};

/// A group of routes sharing a root path, media types and path parameters.
///
/// ```
/// use restspec_core::route::{ParameterSpec, RouteBuilder, RouteSource, WebService};
///
/// let ws = WebService::new()
///     .path("/users/{tenant}")
///     .param(ParameterSpec::path("tenant", "tenant id"))
///     .route(RouteBuilder::get("/{id}").operation("getUser").doc("fetch a user"));
/// assert_eq!(ws.routes()[0].path, "/users/{tenant}/{id}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WebService {
    root_path: String,
    path_parameters: Vec<ParameterSpec>,
    consumes: Vec<String>,
    produces: Vec<String>,
    routes: Vec<RouteRecord>,
}

impl WebService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, root: &str) -> Self {
        self.root_path = root.to_string();
        self
    }

    /// Declare a parameter shared by every route of the service.
    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.path_parameters.push(spec);
        self
    }

    pub fn consumes<I, S>(mut self, media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consumes = media.into_iter().map(Into::into).collect();
        self
    }

    pub fn produces<I, S>(mut self, media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces = media.into_iter().map(Into::into).collect();
        self
    }

    /// Register a route. Routes without their own media types inherit the service's.
    pub fn route(mut self, builder: RouteBuilder) -> Self {
        let record = builder.build(&self.root_path, &self.consumes, &self.produces);
        log::trace!("registered {} {}", record.method, record.path);
        self.routes.push(record);
        self
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }
}

impl RouteSource for WebService {
    fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    fn path_parameters(&self) -> &[ParameterSpec] {
        &self.path_parameters
    }
}

/// Fluent description of a single route, registered with [`WebService::route`].
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    method: String,
    sub_path: String,
    operation: String,
    doc: String,
    consumes: Option<Vec<String>>,
    produces: Option<Vec<String>>,
    parameters: Vec<ParameterSpec>,
    responses: BTreeMap<u16, ResponseSpec>,
    metadata: IndexMap<String, serde_json::Value>,
}

impl RouteBuilder {
    pub fn new(method: &str, sub_path: &str) -> Self {
        Self {
            method: method.to_string(),
            sub_path: sub_path.to_string(),
            operation: String::new(),
            doc: String::new(),
            consumes: None,
            produces: None,
            parameters: Vec::new(),
            responses: BTreeMap::new(),
            metadata: IndexMap::new(),
        }
    }

    pub fn get(sub_path: &str) -> Self {
        Self::new("GET", sub_path)
    }

    pub fn post(sub_path: &str) -> Self {
        Self::new("POST", sub_path)
    }

    pub fn put(sub_path: &str) -> Self {
        Self::new("PUT", sub_path)
    }

    pub fn delete(sub_path: &str) -> Self {
        Self::new("DELETE", sub_path)
    }

    pub fn patch(sub_path: &str) -> Self {
        Self::new("PATCH", sub_path)
    }

    pub fn options(sub_path: &str) -> Self {
        Self::new("OPTIONS", sub_path)
    }

    pub fn head(sub_path: &str) -> Self {
        Self::new("HEAD", sub_path)
    }

    pub fn operation(mut self, id: &str) -> Self {
        self.operation = id.to_string();
        self
    }

    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_string();
        self
    }

    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Declare the request body type, named with [`DefinitionNamer`].
    pub fn reads(self, model: ModelType) -> Self {
        self.reads_with(model, &DefinitionNamer)
    }

    pub fn reads_with(self, model: ModelType, namer: &dyn TypeNamer) -> Self {
        let key = namer.definition_name(&model);
        self.param(ParameterSpec::body("body", "").data_type(&key))
    }

    pub fn returns(mut self, code: u16, message: &str, model: Option<ModelType>) -> Self {
        self.responses.insert(code, ResponseSpec {
            message: message.to_string(),
            model,
        });
        self
    }

    pub fn consumes<I, S>(mut self, media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consumes = Some(media.into_iter().map(Into::into).collect());
        self
    }

    pub fn produces<I, S>(mut self, media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces = Some(media.into_iter().map(Into::into).collect());
        self
    }

    pub fn metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Shorthand for setting [`KEY_OPENAPI_TAGS`] to a list of strings.
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<serde_json::Value> = tags
            .into_iter()
            .map(|t| serde_json::Value::String(t.into()))
            .collect();
        self.metadata(KEY_OPENAPI_TAGS, tags)
    }

    fn build(self, root: &str, consumes: &[String], produces: &[String]) -> RouteRecord {
        RouteRecord {
            path: join_path(root, &self.sub_path),
            method: self.method,
            operation: self.operation,
            doc: self.doc,
            consumes: self.consumes.unwrap_or_else(|| consumes.to_vec()),
            produces: self.produces.unwrap_or_else(|| produces.to_vec()),
            parameters: self.parameters,
            responses: self.responses,
            metadata: self.metadata,
        }
    }
}

fn join_path(root: &str, sub_path: &str) -> String {
    let sub_path = sub_path.trim_start_matches('/');
    if sub_path.is_empty() {
        return root.to_string();
    }
    format!("{}/{}", root.trim_end_matches('/'), sub_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::TagLookup;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/tests/{v}", "/a/{b}"), "/tests/{v}/a/{b}");
        assert_eq!(join_path("/tests/", "a"), "/tests/a");
        assert_eq!(join_path("/tests", ""), "/tests");
        assert_eq!(join_path("", "/a"), "/a");
    }

    #[test]
    fn test_routes_inherit_media_types() {
        let ws = WebService::new()
            .path("/x")
            .consumes(["application/json"])
            .produces(["application/xml"])
            .route(RouteBuilder::get("/a"))
            .route(RouteBuilder::post("/a").produces(["text/plain"]));

        let routes = ws.routes();
        assert_eq!(routes[0].consumes, vec!["application/json"]);
        assert_eq!(routes[0].produces, vec!["application/xml"]);
        assert_eq!(routes[1].produces, vec!["text/plain"]);
    }

    #[test]
    fn test_reads_adds_body_parameter() {
        let ws = WebService::new().route(
            RouteBuilder::post("/a").reads(ModelType::named("restfulspec.Sample")),
        );
        let body = &ws.routes()[0].parameters[0];
        assert_eq!(body.name, "body");
        assert_eq!(body.data_type, "restfulspec.Sample");
    }

    #[test]
    fn test_tags_shorthand() {
        let ws = WebService::new().route(RouteBuilder::get("/a").tags(["x", "y"]));
        assert_eq!(
            ws.routes()[0].openapi_tags(),
            TagLookup::Tags(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_registration_order_preserved() {
        let ws = WebService::new()
            .route(RouteBuilder::get("/b"))
            .route(RouteBuilder::delete("/a"));
        let methods: Vec<_> = ws.routes().iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "DELETE"]);
    }
}
