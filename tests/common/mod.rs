#![allow(dead_code)]

pub mod seed;

use bazaar::schema::Registry;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Once;

static TRACING: Once = Once::new();

pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// A fresh in-memory SQLite database with every table created.
    pub async fn new() -> Self {
        TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });

        let mut opt = ConnectOptions::new("sqlite::memory:");
        // one connection, otherwise every pooled connection sees its own database
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await.unwrap();

        Registry::new(db.get_database_backend())
            .create_all(&db)
            .await
            .unwrap();

        Self { db }
    }
}
