//! Identifier generation

use chrono::Utc;
use rand::Rng;
use std::fmt::Debug;

/// Produces primary keys for newly created rows.
pub trait IdGenerator: Send + Sync + Debug {
    fn generate(&self) -> String;
}

/// Time-ordered, human readable id: `YYYYMMDDhhmmss` + 9 digits of
/// nanoseconds + 9 random digits (32 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanUidGenerator;

impl IdGenerator for HumanUidGenerator {
    fn generate(&self) -> String {
        let now = Utc::now();
        let random: u32 = rand::rng().random_range(0..1_000_000_000);
        format!(
            "{}{:09}{:09}",
            now.format("%Y%m%d%H%M%S"),
            now.timestamp_subsec_nanos() % 1_000_000_000,
            random
        )
    }
}

/// Random v4 UUIDs, for deployments that prefer opaque keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_uid_shape() {
        let id = HumanUidGenerator.generate();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn human_uids_differ() {
        let generator = HumanUidGenerator;
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn uuid_shape() {
        let id = UuidGenerator.generate();
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
