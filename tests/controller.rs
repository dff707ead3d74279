mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use common::send;
use rest_bootstrap::{
    resource_routes, Controller, ListFilter, Operation, Repository, RepositoryError, Resource, User,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Repository with canned behaviour that counts every call it receives.
#[derive(Default)]
struct ScriptedRepo {
    calls: Arc<AtomicUsize>,
    assigned_id: i64,
    existing: Vec<User>,
    failure: Option<&'static str>,
    last_filter: Arc<Mutex<Option<ListFilter>>>,
}

impl ScriptedRepo {
    fn hit(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(msg) => Err(RepositoryError::Storage(sqlx::Error::Protocol(msg.into()))),
            None => Ok(()),
        }
    }

    fn find(&self, id: i64) -> Result<User, RepositoryError> {
        self.existing
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl Repository<User> for ScriptedRepo {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<User>, RepositoryError> {
        self.hit()?;
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        Ok(self.existing.clone())
    }

    async fn create(&self, resource: User) -> Result<User, RepositoryError> {
        self.hit()?;
        Ok(resource.with_id(self.assigned_id))
    }

    async fn get(&self, id: i64) -> Result<User, RepositoryError> {
        self.hit()?;
        self.find(id)
    }

    async fn update(&self, id: i64, resource: User) -> Result<User, RepositoryError> {
        self.hit()?;
        self.find(id)?;
        Ok(resource.with_id(id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.hit()?;
        self.find(id).map(|_| ())
    }
}

fn jim() -> User {
    User {
        id: 3,
        name: "Jim".into(),
    }
}

fn router(repo: ScriptedRepo) -> (Router, Arc<AtomicUsize>) {
    let calls = repo.calls.clone();
    (resource_routes("/users", Controller::new(repo)), calls)
}

#[tokio::test]
async fn add_returns_backend_identity() {
    let (app, calls) = router(ScriptedRepo {
        assigned_id: 7,
        ..Default::default()
    });
    let (status, body) = send(&app, "POST", "/users", Some(r#"{"name":"test"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 7, "name": "test"}));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn get_existing_resource() {
    let (app, _) = router(ScriptedRepo {
        existing: vec![jim()],
        ..Default::default()
    });
    assert_eq!(
        send(&app, "GET", "/users/3", None).await,
        (StatusCode::OK, json!({"id": 3, "name": "Jim"}))
    );
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let (app, calls) = router(ScriptedRepo::default());
    assert_eq!(
        send(&app, "PUT", "/users/4", Some(r#"{"name":"asdf"}"#)).await,
        (StatusCode::NOT_FOUND, json!({"error": "not found"}))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn delete_existing_returns_empty_object() {
    let (app, _) = router(ScriptedRepo {
        existing: vec![jim()],
        ..Default::default()
    });
    assert_eq!(send(&app, "DELETE", "/users/3", None).await, (StatusCode::OK, json!({})));
}

#[tokio::test]
async fn rejected_requests_never_reach_storage() {
    let (app, calls) = router(ScriptedRepo {
        existing: vec![jim()],
        ..Default::default()
    });

    for (method, uri, body) in [
        ("GET", "/users/x", None),
        ("PUT", "/users/x", Some(r#"{"name":"a"}"#)),
        ("DELETE", "/users/x", None),
    ] {
        let (status, body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert_eq!(body, json!({"error": "id must be int"}));
    }

    let (status, body) = send(&app, "POST", "/users", None).await;
    assert_eq!((status, body), (StatusCode::BAD_REQUEST, json!({"error": "no payload"})));
    let (status, _) = send(&app, "PUT", "/users/3", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "POST", "/users", Some(r#"{"name":""}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = send(&app, "PUT", "/users/3", Some(r#"{"id":3}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn storage_message_is_exposed_verbatim() {
    let (app, _) = router(ScriptedRepo {
        failure: Some("disk I/O error"),
        ..Default::default()
    });
    let expected = sqlx::Error::Protocol("disk I/O error".into()).to_string();

    for (method, uri, body) in [
        ("GET", "/users", None),
        ("POST", "/users", Some(r#"{"name":"a"}"#)),
        ("GET", "/users/1", None),
        ("PUT", "/users/1", Some(r#"{"name":"a"}"#)),
        ("DELETE", "/users/1", None),
    ] {
        let (status, body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(body, json!({ "error": expected }));
    }
}

#[tokio::test]
async fn list_passes_limit_filter() {
    let repo = ScriptedRepo {
        existing: vec![jim()],
        ..Default::default()
    };
    let last_filter = repo.last_filter.clone();
    let (app, _) = router(repo);

    let (status, body) = send(&app, "GET", "/users?limit=5", None).await;
    assert_eq!((status, body), (StatusCode::OK, json!([{"id": 3, "name": "Jim"}])));
    assert_eq!(*last_filter.lock().unwrap(), Some(ListFilter { limit: Some(5) }));

    send(&app, "GET", "/users", None).await;
    assert_eq!(*last_filter.lock().unwrap(), Some(ListFilter { limit: None }));
}

#[tokio::test]
async fn partial_exposure_binds_only_enabled_operations() {
    let repo = ScriptedRepo {
        existing: vec![jim()],
        ..Default::default()
    };
    let calls = repo.calls.clone();
    let app = resource_routes(
        "/api/people/",
        Controller::with_operations(repo, &[Operation::Get, Operation::Delete]),
    );

    assert_eq!(send(&app, "GET", "/api/people/3", None).await.0, StatusCode::OK);
    assert_eq!(send(&app, "DELETE", "/api/people/3", None).await.0, StatusCode::OK);
    assert_eq!(
        send(&app, "PUT", "/api/people/3", Some(r#"{"name":"a"}"#)).await.0,
        StatusCode::METHOD_NOT_ALLOWED
    );
    // no collection operation enabled, so the collection path is not routed at all
    assert_eq!(send(&app, "GET", "/api/people", None).await.0, StatusCode::NOT_FOUND);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
