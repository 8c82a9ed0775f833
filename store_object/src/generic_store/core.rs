use crate::query_builder::{Dialect, SqlGenerator};
use crate::sql_logger::SqlLogger;
use crate::traits::table_metadata::TableMetadata;
use crate::uid::IdGenerator;
use crate::validation::ValidatedTableName;
use crate::DbPool;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// State shared by every store opened on the same pool
pub struct StoreCore {
    pub(crate) db_pool: DbPool,
    pub(crate) dialect: Dialect,
    pub(crate) sql_logger: Arc<dyn SqlLogger>,
    pub(crate) id_generator: Arc<dyn IdGenerator>,
    debug_enabled: AtomicBool,
}

impl StoreCore {
    pub fn new(
        db_pool: DbPool,
        dialect: Dialect,
        sql_logger: Arc<dyn SqlLogger>,
        id_generator: Arc<dyn IdGenerator>,
        debug_enabled: bool,
    ) -> Self {
        Self {
            db_pool,
            dialect,
            sql_logger,
            id_generator,
            debug_enabled: AtomicBool::new(debug_enabled),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn sql_logger(&self) -> &Arc<dyn SqlLogger> {
        &self.sql_logger
    }

    pub fn sql_generator(&self) -> SqlGenerator {
        SqlGenerator::new(self.dialect)
    }

    /// Toggle statement logging through the configured `SqlLogger`
    pub fn enable_debug(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for StoreCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCore")
            .field("dialect", &self.dialect)
            .field("sql_logger", &self.sql_logger)
            .field("id_generator", &self.id_generator)
            .field("debug_enabled", &self.is_debug_enabled())
            .finish()
    }
}

/// Generic database store that provides default implementations for all database operations
pub struct GenericStore<T: TableMetadata> {
    pub(crate) core: Arc<StoreCore>,
    pub(crate) table: ValidatedTableName,
    pub(crate) _phantom: std::marker::PhantomData<T>,
}

impl<T: TableMetadata> Clone for GenericStore<T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            table: self.table.clone(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: TableMetadata> std::fmt::Debug for GenericStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericStore")
            .field("entity", &T::entity_name())
            .field("table", &self.table.as_str())
            .field("dialect", &self.core.dialect)
            .finish()
    }
}

impl<T: TableMetadata> GenericStore<T> {
    pub fn new(core: Arc<StoreCore>, table: ValidatedTableName) -> Self {
        Self {
            core,
            table,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn table_name(&self) -> &str {
        self.table.as_str()
    }

    pub fn table(&self) -> &ValidatedTableName {
        &self.table
    }

    pub fn core(&self) -> &Arc<StoreCore> {
        &self.core
    }
}
