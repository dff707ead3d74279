//! Configuration-driven CRUD REST backend: typed resources bound to SQLite tables
//! and exposed as list/get/add/update/delete routes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod resource;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, Operation, ResourceConfig, ResourceKind};
pub use error::{AppError, ConfigError, RepositoryError, ValidationError};
pub use handlers::Controller;
pub use repository::{ListFilter, Repository, SqlResource, SqliteRepository};
pub use resource::{Resource, Thing, User};
pub use routes::{app_routes, common_routes, resource_routes};
pub use state::AppState;
pub use store::{connect, ensure_tables, seed};
