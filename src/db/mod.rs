//! SQLite persistence: schema setup, typed queries and the internal audit log.

pub mod log;
pub mod queries;
pub mod schema;
pub mod store;

pub use schema::SchemaState;
pub use store::Store;
