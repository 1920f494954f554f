use indexmap::IndexMap;

use crate::config::NamingStrategy;
use crate::route::{
    DefinitionNamer, ParameterKind, ParameterSpec, ResponseSpec, RouteRecord, RouteSource,
    TagLookup, TypeNamer,
};
use crate::swagger::{
    HttpMethod, Operation, Parameter, ParameterLocation, Paths, Response, Responses, Schema,
};

use super::name_normalizer::route_to_name;
use super::path_sanitizer::normalize_path;

/// Options controlling how operations are named.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub naming_strategy: NamingStrategy,
    pub aliases: IndexMap<String, String>,
}

/// Build the `paths` section for every route of `source`.
pub fn build_paths<S: RouteSource + ?Sized>(source: &S) -> Paths {
    build_paths_with(source, &BuildOptions::default(), &DefinitionNamer)
}

/// Build the `paths` section with explicit naming options and type namer.
///
/// Routes are visited in registration order. Routes whose normalized paths
/// coincide share one path item; a second route for the same path and method
/// replaces the first.
pub fn build_paths_with<S: RouteSource + ?Sized>(
    source: &S,
    options: &BuildOptions,
    namer: &dyn TypeNamer,
) -> Paths {
    let mut paths = Paths::new();

    for route in source.routes() {
        let path = normalize_path(&route.path);
        let item = paths.entry(path.clone()).or_default();

        let Some(method) = route.http_method() else {
            log::debug!("skipping {} {}: method has no path item slot", route.method, path);
            continue;
        };

        let op = build_operation(source.path_parameters(), route, method, &path, options, namer);
        if item.set(method, op).is_some() {
            log::debug!("{method} {path} registered more than once, keeping the last route");
        }
    }

    paths
}

fn build_operation(
    path_params: &[ParameterSpec],
    route: &RouteRecord,
    method: HttpMethod,
    path: &str,
    options: &BuildOptions,
    namer: &dyn TypeNamer,
) -> Operation {
    let summary = route.doc.split('\n').next().unwrap_or_default();

    let tags = match route.openapi_tags() {
        TagLookup::Tags(tags) => tags,
        TagLookup::WrongShape => {
            log::debug!("ignoring non string-list tags on {method} {path}");
            Vec::new()
        }
        TagLookup::Absent => Vec::new(),
    };

    let parameters = path_params
        .iter()
        .chain(&route.parameters)
        .map(build_parameter)
        .collect();

    let mut responses = Responses::default();
    for (&code, spec) in &route.responses {
        let response = build_response(spec, namer);
        if code == 200 {
            responses.default = Some(response.clone());
        }
        responses.status_codes.insert(code, response);
    }

    Operation {
        operation_id: resolve_operation_id(route, method, path, options),
        summary: non_empty(summary),
        description: non_empty(&route.doc),
        consumes: route.consumes.clone(),
        produces: route.produces.clone(),
        tags,
        parameters,
        responses,
    }
}

fn resolve_operation_id(
    route: &RouteRecord,
    method: HttpMethod,
    path: &str,
    options: &BuildOptions,
) -> Option<String> {
    let raw = match options.naming_strategy {
        NamingStrategy::UseOperationId => route.operation.clone(),
        NamingStrategy::UseRouteBased => route_to_name(method, path),
    };
    let id = options.aliases.get(&raw).cloned().unwrap_or(raw);
    non_empty(&id)
}

/// Convert a documented parameter into its Swagger form.
pub fn build_parameter(spec: &ParameterSpec) -> Parameter {
    let mut param = Parameter {
        name: spec.name.clone(),
        location: None,
        description: non_empty(&spec.description),
        required: spec.required,
        schema: None,
        param_type: None,
        format: None,
        default_value: None,
    };

    let location = match spec.kind {
        ParameterKind::Body => None,
        ParameterKind::Path => Some(ParameterLocation::Path),
        ParameterKind::Query => Some(ParameterLocation::Query),
        ParameterKind::Header => Some(ParameterLocation::Header),
        ParameterKind::Form => Some(ParameterLocation::FormData),
    };

    // TODO: emit path-variable regex constraints as `pattern` once the route
    // model carries them.
    match location {
        None => {
            param.schema = Some(Schema::definition(&spec.data_type));
        }
        Some(location) => {
            param.location = Some(location);
            param.param_type = non_empty(&spec.data_type);
            param.format = non_empty(&spec.data_format);
            param.default_value = spec.default_value.clone();
        }
    }

    param
}

/// Convert a documented response, referencing the payload's definition if any.
pub fn build_response(spec: &ResponseSpec, namer: &dyn TypeNamer) -> Response {
    Response {
        description: spec.message.clone(),
        schema: spec
            .model
            .as_ref()
            .map(|model| Schema::definition(&namer.definition_name(model))),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::ModelType;

    #[test]
    fn test_summary_is_first_line() {
        let route = RouteRecord {
            method: "GET".to_string(),
            path: "/a".to_string(),
            doc: "list things\nreturns every thing".to_string(),
            ..Default::default()
        };
        let op = build_operation(
            &[],
            &route,
            HttpMethod::Get,
            "/a",
            &BuildOptions::default(),
            &DefinitionNamer,
        );
        assert_eq!(op.summary.as_deref(), Some("list things"));
        assert_eq!(
            op.description.as_deref(),
            Some("list things\nreturns every thing")
        );
    }

    #[test]
    fn test_empty_doc() {
        let route = RouteRecord::default();
        let op = build_operation(
            &[],
            &route,
            HttpMethod::Get,
            "",
            &BuildOptions::default(),
            &DefinitionNamer,
        );
        assert!(op.summary.is_none());
        assert!(op.description.is_none());
        assert!(op.operation_id.is_none());
    }

    #[test]
    fn test_form_parameter_location() {
        let p = build_parameter(&ParameterSpec::form("file", "upload"));
        assert_eq!(p.location, Some(ParameterLocation::FormData));
        assert_eq!(p.param_type.as_deref(), Some("string"));
    }

    #[test]
    fn test_header_parameter() {
        let p = build_parameter(&ParameterSpec::header("X-Trace", "trace id").required(true));
        assert_eq!(p.location, Some(ParameterLocation::Header));
        assert!(p.required);
        assert_eq!(p.description.as_deref(), Some("trace id"));
    }

    #[test]
    fn test_response_without_model() {
        let r = build_response(
            &ResponseSpec {
                message: "gone".to_string(),
                model: None,
            },
            &DefinitionNamer,
        );
        assert_eq!(r.description, "gone");
        assert!(r.schema.is_none());
    }

    #[test]
    fn test_response_uses_namer() {
        struct Fixed;
        impl TypeNamer for Fixed {
            fn definition_name(&self, _: &ModelType) -> String {
                "fixed.Name".to_string()
            }
        }
        let r = build_response(
            &ResponseSpec {
                message: "ok".to_string(),
                model: Some(ModelType::named("whatever")),
            },
            &Fixed,
        );
        assert_eq!(r.schema, Some(Schema::definition("fixed.Name")));
    }

    #[test]
    fn test_route_based_naming_with_alias() {
        let route = RouteRecord {
            method: "GET".to_string(),
            operation: "ignored".to_string(),
            ..Default::default()
        };
        let mut options = BuildOptions {
            naming_strategy: NamingStrategy::UseRouteBased,
            ..Default::default()
        };
        assert_eq!(
            resolve_operation_id(&route, HttpMethod::Get, "/users/{id}", &options).as_deref(),
            Some("getUser")
        );

        options
            .aliases
            .insert("getUser".to_string(), "fetchUser".to_string());
        assert_eq!(
            resolve_operation_id(&route, HttpMethod::Get, "/users/{id}", &options).as_deref(),
            Some("fetchUser")
        );
    }
}
