//! Compile a router's route registrations into the `paths` section of a
//! Swagger 2.0 document.
//!
//! ```
//! use restspec_core::route::{ModelType, ParameterSpec, RouteBuilder, WebService};
//! use restspec_core::transform::build_paths;
//!
//! let ws = WebService::new()
//!     .path("/users")
//!     .route(
//!         RouteBuilder::get("/{id:[0-9]+}")
//!             .operation("getUser")
//!             .param(ParameterSpec::path("id", "user id"))
//!             .returns(200, "the user", Some(ModelType::named("models.User"))),
//!     );
//!
//! let paths = build_paths(&ws);
//! let get = paths["/users/{id}"].get.as_ref().unwrap();
//! assert_eq!(get.operation_id.as_deref(), Some("getUser"));
//! ```

pub mod config;
pub mod error;
pub mod route;
pub mod swagger;
pub mod transform;
