//! Durable storage for user records.
//!
//! `Database` owns the SQLite connection and schema; `UserStore` provides
//! the CRUD operations and id allocation on top of it. Presentation code
//! goes through `UserStore` only.

mod db;
mod error;
mod models;
mod users;

pub use db::Database;
pub use error::StoreError;
pub use models::{NewUser, UserRecord, filtered};
pub use users::UserStore;
