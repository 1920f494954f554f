use crate::route::{DefinitionNamer, RouteSource, TypeNamer};
use crate::swagger::spec::Info;
use crate::swagger::{Paths, Swagger};

use super::build_paths::{BuildOptions, build_paths_with};

/// Document-level settings for [`build_swagger`].
#[derive(Debug, Clone, Default)]
pub struct SwaggerConfig {
    pub info: Info,
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub schemes: Vec<String>,
    pub build: BuildOptions,
    /// Applied to the finished document, e.g. to fill in `definitions`.
    pub post_build: Option<fn(&mut Swagger)>,
}

/// Assemble a complete Swagger document from one or more route sources.
pub fn build_swagger(config: &SwaggerConfig, sources: &[&dyn RouteSource]) -> Swagger {
    build_swagger_with(config, sources, &DefinitionNamer)
}

/// Like [`build_swagger`], with an explicit type namer.
///
/// Sources are merged in order. When two sources produce the same path, their
/// path items are merged slot by slot and the later source wins a contested
/// method.
pub fn build_swagger_with(
    config: &SwaggerConfig,
    sources: &[&dyn RouteSource],
    namer: &dyn TypeNamer,
) -> Swagger {
    let mut paths = Paths::new();
    for source in sources {
        for (path, item) in build_paths_with(*source, &config.build, namer) {
            match paths.get_mut(&path) {
                Some(existing) => existing.merge(item),
                None => {
                    paths.insert(path, item);
                }
            }
        }
    }
    log::debug!("built {} paths from {} sources", paths.len(), sources.len());

    let mut swagger = Swagger::new(config.info.clone());
    swagger.host = config.host.clone();
    swagger.base_path = config.base_path.clone();
    swagger.schemes = config.schemes.clone();
    swagger.paths = paths;

    if let Some(post_build) = config.post_build {
        post_build(&mut swagger);
    }
    swagger
}
