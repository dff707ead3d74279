//! Generic CRUD execution against SQLite.

use crate::error::RepositoryError;
use crate::repository::{ListFilter, Repository};
use crate::resource::Resource;
use crate::sql;
use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqliteRow};
use sqlx::FromRow;
use std::marker::PhantomData;

/// Table description a resource provides so it can be stored by [`SqliteRepository`].
pub trait SqlResource: Resource + for<'r> FromRow<'r, SqliteRow> + Unpin {
    const TABLE: &'static str;
    /// Attribute columns, `id` excluded. Order must match [`SqlResource::bind_columns`].
    const COLUMNS: &'static [&'static str];
    /// `CREATE TABLE IF NOT EXISTS` statement run at bootstrap.
    const DDL: &'static str;

    fn bind_columns<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;
}

pub struct SqliteRepository<R> {
    pool: SqlitePool,
    _resource: PhantomData<fn() -> R>,
}

impl<R> SqliteRepository<R> {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteRepository {
            pool,
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for SqliteRepository<R> {
    fn clone(&self) -> Self {
        SqliteRepository::new(self.pool.clone())
    }
}

#[async_trait]
impl<R: SqlResource> Repository<R> for SqliteRepository<R> {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<R>, RepositoryError> {
        let sql = sql::select_list(R::TABLE, R::COLUMNS, filter.limit.is_some());
        tracing::debug!(sql = %sql, limit = ?filter.limit, "query");
        let mut query = sqlx::query_as::<Sqlite, R>(&sql);
        if let Some(limit) = filter.limit {
            query = query.bind(i64::from(limit));
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn create(&self, resource: R) -> Result<R, RepositoryError> {
        let sql = sql::insert(R::TABLE, R::COLUMNS);
        tracing::debug!(sql = %sql, "execute");
        let result = resource
            .bind_columns(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;
        self.get(result.last_insert_rowid()).await
    }

    async fn get(&self, id: i64) -> Result<R, RepositoryError> {
        let sql = sql::select_by_id(R::TABLE, R::COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<Sqlite, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, id: i64, resource: R) -> Result<R, RepositoryError> {
        let sql = sql::update(R::TABLE, R::COLUMNS);
        tracing::debug!(sql = %sql, id, "execute");
        let result = resource
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(resource.with_id(id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let sql = sql::delete(R::TABLE);
        tracing::debug!(sql = %sql, id, "execute");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
