use crate::{schema::Registry, Error};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::{str::FromStr, time::Duration};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const DATABASE_MIN_CONNECTIONS: &str = "DATABASE_MIN_CONNECTIONS";
pub const DATABASE_CONNECT_TIMEOUT: &str = "DATABASE_CONNECT_TIMEOUT";
pub const DATABASE_SQLX_LOGGING: &str = "DATABASE_SQLX_LOGGING";

/// Connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout: Option<Duration>,
    pub sqlx_logging: bool,
}

impl Config {
    pub fn new<T>(database_url: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            database_url: database_url.into(),
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            sqlx_logging: false,
        }
    }

    /// Reads settings from the process environment, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL).ok_or(Error::MissingEnv(DATABASE_URL))?;
        let connect_timeout: Option<u64> = parse(&lookup, DATABASE_CONNECT_TIMEOUT)?;

        Ok(Self {
            database_url,
            max_connections: parse(&lookup, DATABASE_MAX_CONNECTIONS)?,
            min_connections: parse(&lookup, DATABASE_MIN_CONNECTIONS)?,
            connect_timeout: connect_timeout.map(Duration::from_secs),
            sqlx_logging: parse(&lookup, DATABASE_SQLX_LOGGING)?.unwrap_or(false),
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.as_str());
        if let Some(max) = self.max_connections {
            opt.max_connections(max);
        }
        if let Some(min) = self.min_connections {
            opt.min_connections(min);
        }
        if let Some(timeout) = self.connect_timeout {
            opt.connect_timeout(timeout);
        }
        opt.sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);
        opt
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, Error>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidEnv { key, value }),
    }
}

/// Opens a connection pool.
#[tracing::instrument(skip_all)]
pub async fn connect(config: &Config) -> Result<DatabaseConnection, Error> {
    let db = Database::connect(config.connect_options()).await?;
    tracing::info!(backend = ?db.get_database_backend(), "connected");
    Ok(db)
}

/// Opens a connection pool and creates any missing table.
pub async fn connect_and_create(config: &Config) -> Result<DatabaseConnection, Error> {
    let db = connect(config).await?;
    Registry::new(db.get_database_backend())
        .create_all(&db)
        .await?;
    Ok(db)
}
