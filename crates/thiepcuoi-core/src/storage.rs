//! Persistent storage using redb.
//!
//! Holds the guests' attendance confirmations under a single fixed key, as a
//! JSON array in submission order.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::error::InvitationResult;
use crate::rsvp::Confirmation;

/// File name of the store inside the data directory.
pub const STORE_FILE: &str = "confirmations.redb";

/// Key holding the confirmation list.
pub const CONFIRMATIONS_KEY: &str = "confirmations";

const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// Local key-value store for RSVP confirmations
#[derive(Clone)]
pub struct ConfirmationStore {
    db: Arc<RwLock<Database>>,
}

impl ConfirmationStore {
    /// Open or create the store, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> InvitationResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        debug!(path = %path.display(), "Confirmation store opened");
        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// All confirmations, oldest first. An empty store yields an empty list.
    pub fn list(&self) -> InvitationResult<Vec<Confirmation>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        let confirmations = match table.get(CONFIRMATIONS_KEY)? {
            Some(v) => serde_json::from_slice(v.value())?,
            None => Vec::new(),
        };
        Ok(confirmations)
    }

    /// Append one confirmation to the persisted list.
    pub fn append(&self, confirmation: &Confirmation) -> InvitationResult<()> {
        let db = self.db.write();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            let mut all: Vec<Confirmation> = match table.get(CONFIRMATIONS_KEY)? {
                Some(v) => serde_json::from_slice(v.value())?,
                None => Vec::new(),
            };
            all.push(confirmation.clone());

            let data = serde_json::to_vec(&all)?;
            table.insert(CONFIRMATIONS_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_store() -> (ConfirmationStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfirmationStore::open(temp_dir.path().join(STORE_FILE)).unwrap();
        (store, temp_dir)
    }

    fn confirmation(name: &str, number: u32) -> Confirmation {
        Confirmation {
            name: name.to_string(),
            number,
            date: Utc.with_ymd_and_hms(2025, 12, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/path").join(STORE_FILE);
        assert!(ConfirmationStore::open(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (store, _temp) = create_test_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_order() {
        let (store, _temp) = create_test_store();
        store.append(&confirmation("Lan", 2)).unwrap();
        store.append(&confirmation("Hùng", 4)).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Lan", "Hùng"]);
    }

    #[test]
    fn test_confirmations_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(STORE_FILE);
        {
            let store = ConfirmationStore::open(&path).unwrap();
            store.append(&confirmation("Lan", 2)).unwrap();
        }
        let store = ConfirmationStore::open(&path).unwrap();
        assert_eq!(store.list().unwrap(), vec![confirmation("Lan", 2)]);
    }

    #[test]
    fn test_record_shape() {
        let json = serde_json::to_value(confirmation("Lan", 2)).unwrap();
        assert_eq!(json["name"], "Lan");
        assert_eq!(json["number"], 2);
        assert_eq!(json["date"], "2025-12-01T08:00:00Z");
    }
}
