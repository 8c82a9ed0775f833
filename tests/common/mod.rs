//! Shared fixtures for the integration tests

#![allow(dead_code)]

use rolestore::prelude::*;
use sqlx::any::AnyPoolOptions;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Route library logs to the test output. Controlled by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Single-connection in-memory SQLite store, tables created.
pub async fn memory_store() -> RoleStore {
    init_tracing();
    let config = AppConfig {
        database: DatabaseConfig::new("sqlite::memory:".to_string(), 1, 1, 5, 0, 0),
        store: StoreConfig::new(
            "roles_role".to_string(),
            "roles_entity_role".to_string(),
            true,
            false,
        ),
    };
    RoleStore::connect(&config)
        .await
        .expect("in-memory store should open")
}

/// In-memory store that reports every statement to the returned logger.
pub async fn recorded_store() -> (RoleStore, Arc<RecordingSqlLogger>) {
    init_tracing();
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("sqlite pool should open");

    let logger = Arc::new(RecordingSqlLogger::default());
    let options = NewStoreOptions::new(pool, Dialect::Sqlite)
        .with_automigrate(true)
        .with_debug(true)
        .with_sql_logger(logger.clone());
    let store = RoleStore::new(options)
        .await
        .expect("recorded store should open");
    logger.clear();

    (store, logger)
}

#[derive(Debug, Default)]
pub struct RecordingSqlLogger {
    statements: Mutex<Vec<(String, String)>>,
}

impl RecordingSqlLogger {
    pub fn operations(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .map(|(operation, _)| operation.clone())
            .collect()
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .map(|(_, sql)| sql.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.statements.lock().unwrap().clear();
    }
}

impl SqlLogger for RecordingSqlLogger {
    fn log_sql(&self, operation: &str, sql: &str, _params: &[String]) {
        self.statements
            .lock()
            .unwrap()
            .push((operation.to_string(), sql.to_string()));
    }
}

pub fn new_role(handle: &str, title: &str, status: RoleStatus) -> Role {
    let mut role = Role::new();
    role.set_handle(handle).set_title(title).set_status(status);
    role
}

pub fn new_entity_role(entity_type: &str, entity_id: &str, role_id: &str) -> EntityRole {
    let mut entity_role = EntityRole::new();
    entity_role
        .set_entity_type(entity_type)
        .set_entity_id(entity_id)
        .set_role_id(role_id);
    entity_role
}
