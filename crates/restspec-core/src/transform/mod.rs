pub mod build_paths;
pub mod document;
pub mod name_normalizer;
pub mod path_sanitizer;

pub use build_paths::{BuildOptions, build_parameter, build_paths, build_paths_with, build_response};
pub use document::{SwaggerConfig, build_swagger, build_swagger_with};
pub use path_sanitizer::normalize_path;
