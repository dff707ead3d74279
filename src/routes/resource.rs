//! Standard resource routes: collection at the prefix, members at `{prefix}/:id`.
//! Each route is registered only when the controller allows its operation.

use crate::config::{Operation, ResourceConfig, ResourceKind};
use crate::handlers::resource::{add, delete, get, list, update, Controller};
use crate::repository::{Repository, SqliteRepository};
use crate::resource::{Resource, Thing, User};
use axum::routing::MethodRouter;
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn resource_routes<R: Resource, P: Repository<R>>(prefix: &str, controller: Controller<R, P>) -> Router {
    let prefix = crate::config::normalize_prefix(prefix);
    let collection_path = if prefix.is_empty() { "/".to_string() } else { prefix.clone() };
    let member_path = format!("{}/:id", prefix);

    let mut collection: MethodRouter<Arc<Controller<R, P>>> = MethodRouter::new();
    let mut member: MethodRouter<Arc<Controller<R, P>>> = MethodRouter::new();
    let mut has_collection = false;
    let mut has_member = false;

    if controller.allows(Operation::List) {
        collection = collection.get(list::<R, P>);
        has_collection = true;
    }
    if controller.allows(Operation::Add) {
        collection = collection.post(add::<R, P>);
        has_collection = true;
    }
    if controller.allows(Operation::Get) {
        member = member.get(get::<R, P>);
        has_member = true;
    }
    if controller.allows(Operation::Update) {
        member = member.put(update::<R, P>);
        has_member = true;
    }
    if controller.allows(Operation::Delete) {
        member = member.delete(delete::<R, P>);
        has_member = true;
    }

    let mut router = Router::new();
    if has_collection {
        router = router.route(&collection_path, collection);
    }
    if has_member {
        router = router.route(&member_path, member);
    }
    router.with_state(Arc::new(controller))
}

/// Resolve the configured kind to its concrete resource type and bind it to SQLite storage.
pub fn bind_resource(config: &ResourceConfig, pool: &SqlitePool) -> Router {
    let prefix = config.prefix();
    tracing::info!(kind = config.kind.name(), prefix = %prefix, operations = ?config.operations, "binding resource");
    match config.kind {
        ResourceKind::Users => resource_routes(
            &prefix,
            Controller::with_operations(SqliteRepository::<User>::new(pool.clone()), &config.operations),
        ),
        ResourceKind::Things => resource_routes(
            &prefix,
            Controller::with_operations(SqliteRepository::<Thing>::new(pool.clone()), &config.operations),
        ),
    }
}
