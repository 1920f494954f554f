//! Route registries described in YAML or JSON files.
//!
//! This is the form in which routes reach the CLI: each service lists its
//! root path, shared parameters and routes, and loading replays them through
//! [`WebService`] so the result matches in-process registration.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Deserialize;

use super::RouteSource;
use super::model::ModelType;
use super::parameter::{ParameterKind, ParameterSpec};
use super::service::{RouteBuilder, WebService};
use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    services: Vec<ServiceDef>,
}

#[derive(Debug, Deserialize)]
struct ServiceDef {
    #[serde(default)]
    path: String,
    #[serde(default)]
    consumes: Vec<String>,
    #[serde(default)]
    produces: Vec<String>,
    #[serde(default)]
    params: Vec<ParamDef>,
    #[serde(default)]
    routes: Vec<RouteDef>,
}

#[derive(Debug, Deserialize)]
struct ParamDef {
    kind: ParameterKind,
    name: String,
    #[serde(default)]
    description: String,
    required: Option<bool>,
    #[serde(rename = "type")]
    data_type: Option<String>,
    format: Option<String>,
    default: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RouteDef {
    #[serde(default)]
    method: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    operation: String,
    #[serde(default)]
    doc: String,
    consumes: Option<Vec<String>>,
    produces: Option<Vec<String>>,
    #[serde(default)]
    params: Vec<ParamDef>,
    reads: Option<ModelType>,
    #[serde(default)]
    responses: BTreeMap<u16, ResponseDef>,
    tags: Option<Vec<String>>,
    #[serde(default)]
    metadata: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseDef {
    #[serde(default)]
    message: String,
    model: Option<ModelType>,
}

/// Load services from a YAML registry.
pub fn from_yaml(input: &str) -> Result<Vec<WebService>, LoadError> {
    let file: RegistryFile = serde_yaml_ng::from_str(input)?;
    into_services(file)
}

/// Load services from a JSON registry.
pub fn from_json(input: &str) -> Result<Vec<WebService>, LoadError> {
    let file: RegistryFile = serde_json::from_str(input)?;
    into_services(file)
}

fn into_services(file: RegistryFile) -> Result<Vec<WebService>, LoadError> {
    file.services.into_iter().map(into_service).collect()
}

fn into_service(def: ServiceDef) -> Result<WebService, LoadError> {
    if def.routes.is_empty() {
        return Err(LoadError::EmptyService(def.path));
    }

    let mut ws = WebService::new()
        .path(&def.path)
        .consumes(def.consumes)
        .produces(def.produces);
    for p in def.params {
        ws = ws.param(into_parameter(p));
    }

    for route in def.routes {
        if route.method.trim().is_empty() {
            return Err(LoadError::MissingField(format!(
                "method of route {}{}",
                def.path, route.path
            )));
        }
        ws = ws.route(into_route(route));
    }

    log::debug!("loaded service {} with {} routes", def.path, ws.routes().len());
    Ok(ws)
}

fn into_route(def: RouteDef) -> RouteBuilder {
    let mut builder = RouteBuilder::new(&def.method.trim().to_ascii_uppercase(), &def.path)
        .operation(&def.operation)
        .doc(&def.doc);

    if let Some(consumes) = def.consumes {
        builder = builder.consumes(consumes);
    }
    if let Some(produces) = def.produces {
        builder = builder.produces(produces);
    }
    for p in def.params {
        builder = builder.param(into_parameter(p));
    }
    if let Some(model) = def.reads {
        builder = builder.reads(model);
    }
    for (code, response) in def.responses {
        builder = builder.returns(code, &response.message, response.model);
    }
    for (key, value) in def.metadata {
        builder = builder.metadata(&key, value);
    }
    if let Some(tags) = def.tags {
        builder = builder.tags(tags);
    }
    builder
}

fn into_parameter(def: ParamDef) -> ParameterSpec {
    let mut spec = match def.kind {
        ParameterKind::Path => ParameterSpec::path(&def.name, &def.description),
        ParameterKind::Query => ParameterSpec::query(&def.name, &def.description),
        ParameterKind::Header => ParameterSpec::header(&def.name, &def.description),
        ParameterKind::Form => ParameterSpec::form(&def.name, &def.description),
        ParameterKind::Body => ParameterSpec::body(&def.name, &def.description),
    };
    if let Some(data_type) = def.data_type {
        spec = spec.data_type(&data_type);
    }
    if let Some(format) = def.format {
        spec = spec.data_format(&format);
    }
    if let Some(default) = def.default {
        spec = spec.default_value(default);
    }
    if let Some(required) = def.required {
        spec = spec.required(required);
    }
    spec
}
