//! Core RoleStore functionality
//!
//! This module contains the `RoleStore` coordinator: it owns the pool, the
//! shared store state and the two entity stores.

use sqlx::any::AnyPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use store_object::{
    Dialect, EntityRole, GenericStore, HumanUidGenerator, IdGenerator, NoopSqlLogger, Role,
    SqlLogger, StoreCore, StoreResult, StoreTransaction, TracingSqlLogger, ValidatedTableName,
};

use crate::errors::RoleStoreError;
use config::{AppConfig, StoreConfig};

/// Everything needed to open a `RoleStore` on an existing pool
#[derive(Debug, Clone)]
pub struct NewStoreOptions {
    pub pool: store_object::DbPool,
    pub dialect: Dialect,
    pub role_table_name: String,
    pub entity_role_table_name: String,
    pub automigrate_enabled: bool,
    pub debug_enabled: bool,
    /// Receives executed statements while debug is enabled. Defaults to a no-op.
    pub sql_logger: Option<Arc<dyn SqlLogger>>,
    /// Defaults to `HumanUidGenerator`.
    pub id_generator: Option<Arc<dyn IdGenerator>>,
}

impl NewStoreOptions {
    /// Options with the default table names, no migration and no debug
    pub fn new(pool: store_object::DbPool, dialect: Dialect) -> Self {
        let defaults = StoreConfig::default();
        Self {
            pool,
            dialect,
            role_table_name: defaults.role_table_name,
            entity_role_table_name: defaults.entity_role_table_name,
            automigrate_enabled: false,
            debug_enabled: false,
            sql_logger: None,
            id_generator: None,
        }
    }

    pub fn with_table_names(
        mut self,
        role_table_name: impl Into<String>,
        entity_role_table_name: impl Into<String>,
    ) -> Self {
        self.role_table_name = role_table_name.into();
        self.entity_role_table_name = entity_role_table_name.into();
        self
    }

    pub fn with_automigrate(mut self, enabled: bool) -> Self {
        self.automigrate_enabled = enabled;
        self
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn with_sql_logger(mut self, logger: Arc<dyn SqlLogger>) -> Self {
        self.sql_logger = Some(logger);
        self
    }

    pub fn with_id_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }
}

/// Role store: the role and entity-role stores over one connection pool
#[derive(Debug, Clone)]
pub struct RoleStore {
    core: Arc<StoreCore>,
    roles: GenericStore<Role>,
    entity_roles: GenericStore<EntityRole>,
}

impl RoleStore {
    /// Open a store on an existing pool, creating the tables when
    /// `automigrate_enabled` is set
    pub async fn new(options: NewStoreOptions) -> Result<Self, RoleStoreError> {
        let role_table = ValidatedTableName::new(&options.role_table_name)?;
        let entity_role_table = ValidatedTableName::new(&options.entity_role_table_name)?;
        if role_table == entity_role_table {
            return Err(RoleStoreError::InvalidOptions(
                "role and entity role tables must differ".to_string(),
            ));
        }

        let core = Arc::new(StoreCore::new(
            options.pool,
            options.dialect,
            options
                .sql_logger
                .unwrap_or_else(|| Arc::new(NoopSqlLogger)),
            options
                .id_generator
                .unwrap_or_else(|| Arc::new(HumanUidGenerator)),
            options.debug_enabled,
        ));

        let store = Self {
            roles: GenericStore::new(Arc::clone(&core), role_table),
            entity_roles: GenericStore::new(Arc::clone(&core), entity_role_table),
            core,
        };

        if options.automigrate_enabled {
            store.auto_migrate().await?;
        }

        crate::debug_log!(
            "role store ready on {} ({}, {})",
            store.core.dialect(),
            store.roles.table_name(),
            store.entity_roles.table_name()
        );
        Ok(store)
    }

    /// Build the pool from configuration and open the store on it
    pub async fn connect(config: &AppConfig) -> Result<Self, RoleStoreError> {
        config.validate()?;
        sqlx::any::install_default_drivers();

        let database = &config.database;
        let url = database.connection_string();
        let dialect = Dialect::from_url(url)
            .ok_or_else(|| RoleStoreError::UnsupportedDatabase(url.to_string()))?;

        let mut pool_options = AnyPoolOptions::new()
            .max_connections(database.max_connections)
            .min_connections(database.min_connections)
            .acquire_timeout(Duration::from_secs(database.connection_timeout_seconds));

        // Zero disables the timeout
        pool_options = pool_options.idle_timeout(
            (database.idle_timeout_seconds > 0)
                .then(|| Duration::from_secs(database.idle_timeout_seconds)),
        );
        pool_options = pool_options.max_lifetime(
            (database.max_lifetime_seconds > 0)
                .then(|| Duration::from_secs(database.max_lifetime_seconds)),
        );

        let pool = pool_options.connect(url).await?;
        tracing::info!(%dialect, "connected role store database");

        let options = NewStoreOptions::new(pool, dialect)
            .with_table_names(
                config.store.role_table_name.clone(),
                config.store.entity_role_table_name.clone(),
            )
            .with_automigrate(config.store.automigrate_enabled)
            .with_debug(config.store.debug_enabled)
            .with_sql_logger(Arc::new(TracingSqlLogger));

        Self::new(options).await
    }

    /// Load configuration (see `AppConfig::load`) and connect
    pub async fn connect_from_env() -> Result<Self, RoleStoreError> {
        let config = AppConfig::load()?;
        Self::connect(&config).await
    }

    /// Get database pool reference
    pub fn pool(&self) -> &store_object::DbPool {
        self.core.pool()
    }

    pub fn dialect(&self) -> Dialect {
        self.core.dialect()
    }

    pub fn roles(&self) -> &GenericStore<Role> {
        &self.roles
    }

    pub fn entity_roles(&self) -> &GenericStore<EntityRole> {
        &self.entity_roles
    }

    /// Toggle statement logging for both stores
    pub fn enable_debug(&self, enabled: bool) {
        self.core.enable_debug(enabled);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.core.is_debug_enabled()
    }

    /// Begin a transaction shared by both stores
    pub async fn begin_transaction(&self) -> StoreResult<StoreTransaction> {
        StoreTransaction::begin(self.pool()).await
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), RoleStoreError> {
        sqlx::query("SELECT 1").fetch_one(self.pool()).await?;
        Ok(())
    }

    /// Close every pooled connection. Later calls without a transaction fail.
    pub async fn close(&self) {
        self.pool().close().await;
    }
}
