pub mod core;
pub mod executor;
pub mod soft_deletable;
pub mod store_object;
pub mod transaction;

pub use self::core::{GenericStore, StoreCore};
pub use executor::ExecContext;
pub use transaction::StoreTransaction;
