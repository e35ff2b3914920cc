//! Infrastructure layer.

pub mod database;

pub use self::database::Database;
#[cfg(feature = "inmem")]
pub use self::database::{in_memory, InMemory};
