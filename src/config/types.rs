//! Raw config types matching the JSON config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP operation a resource may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Get,
    Add,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::List,
        Operation::Get,
        Operation::Add,
        Operation::Update,
        Operation::Delete,
    ];
}

/// Closed set of resource types this service can bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Users,
    Things,
}

impl ResourceKind {
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Things => "things",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub kind: ResourceKind,
    /// Path prefix; `/<kind>` when absent.
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default = "all_operations")]
    pub operations: Vec<Operation>,
}

impl ResourceConfig {
    pub fn new(kind: ResourceKind) -> Self {
        ResourceConfig {
            kind,
            prefix: None,
            operations: all_operations(),
        }
    }

    pub fn prefix(&self) -> String {
        match &self.prefix {
            Some(p) => normalize_prefix(p),
            None => normalize_prefix(self.kind.name()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Request body limit in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
    /// Target of the `GET /` redirect. No redirect when null.
    #[serde(default = "default_root_redirect")]
    pub root_redirect: Option<String>,
    /// Insert the default admin user at startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    #[serde(default = "default_resources")]
    pub resources: Vec<ResourceConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: default_database_path(),
            listen_addr: default_listen_addr(),
            max_connections: default_max_connections(),
            body_limit: default_body_limit(),
            root_redirect: default_root_redirect(),
            seed: default_seed(),
            resources: default_resources(),
        }
    }
}

/// Leading `/`, no trailing `/`. The root prefix is the empty string.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn all_operations() -> Vec<Operation> {
    Operation::ALL.to_vec()
}

fn default_database_path() -> PathBuf {
    PathBuf::from("gorunner.db")
}

fn default_listen_addr() -> String {
    "0.0.0.0:8099".into()
}

fn default_max_connections() -> u32 {
    5
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_root_redirect() -> Option<String> {
    Some("/users".into())
}

fn default_seed() -> bool {
    true
}

fn default_resources() -> Vec<ResourceConfig> {
    vec![ResourceConfig::new(ResourceKind::Users)]
}
