use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::swagger::spec::Info;
use crate::transform::{BuildOptions, SwaggerConfig};

/// Top-level project configuration loaded from `.restspec.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestspecConfig {
    /// Route registry file (YAML or JSON).
    pub input: String,
    /// Document to write; `.yaml`/`.yml` selects YAML, anything else JSON.
    pub output: String,
    pub info: InfoConfig,
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub schemes: Vec<String>,
    pub naming: NamingConfig,
}

impl Default for RestspecConfig {
    fn default() -> Self {
        Self {
            input: "routes.yaml".to_string(),
            output: "swagger.json".to_string(),
            info: InfoConfig::default(),
            host: None,
            base_path: None,
            schemes: Vec::new(),
            naming: NamingConfig::default(),
        }
    }
}

impl RestspecConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            naming_strategy: self.naming.strategy,
            aliases: self.naming.aliases.clone(),
        }
    }

    pub fn swagger_config(&self) -> SwaggerConfig {
        SwaggerConfig {
            info: Info {
                title: self.info.title.clone(),
                description: self.info.description.clone(),
                version: self.info.version.clone(),
                ..Default::default()
            },
            host: self.host.clone(),
            base_path: self.base_path.clone(),
            schemes: self.schemes.clone(),
            build: self.build_options(),
            post_build: None,
        }
    }
}

/// The document's `info` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InfoConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            title: "API".to_string(),
            version: "1.0.0".to_string(),
            description: None,
        }
    }
}

/// Naming strategy and aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub strategy: NamingStrategy,
    /// Map from resolved operation id (registered or route-derived) to custom alias.
    pub aliases: IndexMap<String, String>,
}

/// How operation ids are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// Use the operation id the route was registered with.
    #[default]
    UseOperationId,
    /// Derive from method and path, e.g. `GET /users/{id}` → `getUser`.
    UseRouteBased,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".restspec.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<RestspecConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: RestspecConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# restspec configuration
input: routes.yaml
output: swagger.json      # .yaml / .yml writes YAML

info:
  title: API
  version: 1.0.0
  # description: What this API does

# host: api.example.com
# base_path: /v1
schemes: []

naming:
  strategy: use_operation_id  # use_operation_id | use_route_based
  aliases: {}
    # getUser: fetchUser        # operation id → custom name
"#
}
