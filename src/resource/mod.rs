//! Resource contract and the concrete resources exposed by the service.

mod thing;
mod user;

pub use thing::Thing;
pub use user::User;

use crate::error::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record exposed through a CRUD endpoint set.
///
/// Bodies are decoded with serde, so a field missing from the payload takes its
/// `Default` value and is reported by [`Resource::validate`] rather than as a
/// parse failure.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Attribute rules that must hold before the value reaches storage.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Same value carrying the storage identity `id`.
    fn with_id(self, id: i64) -> Self;
}
