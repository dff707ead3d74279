//! Generic resource controller: list, get, add, update, delete.

use crate::config::Operation;
use crate::error::AppError;
use crate::repository::{ListFilter, Repository};
use crate::resource::Resource;
use crate::response;
use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, PathRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Binds one repository to the HTTP operations it is allowed to serve.
pub struct Controller<R, P> {
    repository: P,
    operations: Vec<Operation>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, P: Repository<R>> Controller<R, P> {
    /// Controller exposing all five operations.
    pub fn new(repository: P) -> Self {
        Self::with_operations(repository, Operation::ALL)
    }

    pub fn with_operations(repository: P, operations: &[Operation]) -> Self {
        Controller {
            repository,
            operations: operations.to_vec(),
            _resource: PhantomData,
        }
    }

    pub fn allows(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("id must be int".into()))
}

/// A path segment axum cannot decode (e.g. invalid UTF-8) is a bad id too.
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    match path {
        Ok(Path(id_str)) => parse_id(&id_str),
        Err(_) => Err(AppError::BadRequest("id must be int".into())),
    }
}

fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, AppError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest("no payload".into())
        }
    })
}

/// Decode and validate a request body. Empty and malformed bodies are distinct 400s.
/// Only JSON objects are accepted.
fn decode_body<R: Resource>(body: &Bytes) -> Result<R, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("no payload".into()));
    }
    let malformed = || AppError::BadRequest("Can't parse JSON payload".into());
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|_| malformed())?;
    if !value.is_object() {
        return Err(malformed());
    }
    let resource: R = serde_json::from_value(value).map_err(|_| malformed())?;
    resource.validate()?;
    Ok(resource)
}

pub async fn list<R: Resource, P: Repository<R>>(
    State(ctl): State<Arc<Controller<R, P>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ListFilter::from_query(&params);
    let rows = ctl.repository.list(&filter).await?;
    Ok(response::ok(rows))
}

pub async fn add<R: Resource, P: Repository<R>>(
    State(ctl): State<Arc<Controller<R, P>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let resource = decode_body::<R>(&read_body(body)?)?;
    let created = ctl.repository.create(resource).await?;
    Ok(response::created(created))
}

pub async fn get<R: Resource, P: Repository<R>>(
    State(ctl): State<Arc<Controller<R, P>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let row = ctl.repository.get(id).await?;
    Ok(response::ok(row))
}

pub async fn update<R: Resource, P: Repository<R>>(
    State(ctl): State<Arc<Controller<R, P>>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let resource = decode_body::<R>(&read_body(body)?)?;
    let updated = ctl.repository.update(id, resource).await?;
    Ok(response::ok(updated))
}

pub async fn delete<R: Resource, P: Repository<R>>(
    State(ctl): State<Arc<Controller<R, P>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    ctl.repository.delete(id).await?;
    Ok(response::empty_object())
}
