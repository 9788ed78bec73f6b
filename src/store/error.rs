use thiserror::Error;

/// Errors produced by the user store.
///
/// None of these are fatal to the process: validation failures are reported
/// to the user before storage is touched, read failures degrade to an empty
/// working set, and write failures leave the previous state intact.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("failed to read user records")]
    Read(#[source] rusqlite::Error),

    #[error("failed to write user records")]
    Write(#[source] rusqlite::Error),
}
