use crate::error::ValidationError;
use crate::repository::SqlResource;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User {
            id: 0,
            name: name.into(),
        }
    }
}

impl Resource for User {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError("please provide 'name'".into()));
        }
        Ok(())
    }

    fn with_id(self, id: i64) -> Self {
        User { id, ..self }
    }
}

impl SqlResource for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name"];
    const DDL: &'static str = r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            name TEXT NOT NULL CHECK (name <> '')
        )
    "#;

    fn bind_columns<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(self.name.as_str())
    }
}
