use sea_orm::DbErr;
use thiserror::Error;

/// Failures while configuring or opening the store.
///
/// Persistence operations themselves return [`DbErr`] unchanged; use
/// [`DbErr::sql_err`] to tell constraint violations apart.
#[derive(Error, Debug)]
pub enum Error {
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),
    #[error("environment variable `{key}` has invalid value `{value}`")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    Db(#[from] DbErr),
}
