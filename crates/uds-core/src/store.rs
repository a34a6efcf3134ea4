//! Consumed settings-store interface

use crate::Result;

/// Key/value store persisting service-enablement settings.
///
/// Mutations are buffered; [`SettingsStore::save`] makes them durable.
pub trait SettingsStore {
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key`; removing an absent key is a no-op.
    fn delete(&mut self, key: &str);

    fn save(&self) -> Result<()>;
}

impl SettingsStore for uds_fs::JsonKvStore {
    fn set(&mut self, key: &str, value: &str) {
        uds_fs::JsonKvStore::set(self, key, value);
    }

    fn delete(&mut self, key: &str) {
        uds_fs::JsonKvStore::delete(self, key);
    }

    fn save(&self) -> Result<()> {
        Ok(uds_fs::JsonKvStore::save(self)?)
    }
}
