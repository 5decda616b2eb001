//! Data-access error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("director {0} does not exist")]
    UnknownDirector(i32),

    #[error("genre {0} does not exist")]
    UnknownGenre(i32),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
