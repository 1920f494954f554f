pub mod model;
pub mod parameter;
pub mod record;
pub mod registry;
pub mod service;

pub use model::{DefinitionNamer, ModelType, TypeNamer};
pub use parameter::{ParameterKind, ParameterSpec};
pub use record::{KEY_OPENAPI_TAGS, ResponseSpec, RouteRecord, TagLookup};
pub use service::{RouteBuilder, WebService};

/// Read-only view of a router's registrations.
pub trait RouteSource {
    /// Every route, in registration order.
    fn routes(&self) -> &[RouteRecord];

    /// Parameters declared once for the whole service and shared by all its routes.
    fn path_parameters(&self) -> &[ParameterSpec];
}
