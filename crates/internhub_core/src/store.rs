//! crates/internhub_core/src/store.rs
//!
//! The record store: exclusive owner of the in-memory collection, mirrored to a
//! `KeyValueStore` blob after every insert.

use crate::domain::InternRecord;
use crate::ports::{KeyValueStore, PortResult};
use crate::seed::example_records;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Key under which the whole collection is persisted.
pub const STORAGE_KEY: &str = "internhub_data";

/// A read-only view of the collection at one point in time, newest first.
pub type Snapshot = Arc<[InternRecord]>;

/// What the store starts with when nothing usable is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupSeed {
    #[default]
    Examples,
    Empty,
}

pub struct RecordStore {
    records: RwLock<Snapshot>,
    kv: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    /// Restores the persisted collection, or falls back to `seed` if it is
    /// missing or unreadable. Never fails.
    pub fn initialize(kv: Arc<dyn KeyValueStore>, seed: StartupSeed) -> Self {
        let records = match restore(kv.as_ref()) {
            Ok(Some(records)) => {
                info!("Restored {} records from '{}'", records.len(), STORAGE_KEY);
                records
            }
            Ok(None) => {
                info!("No persisted records under '{}', starting with {:?} seed", STORAGE_KEY, seed);
                seeded(seed)
            }
            Err(e) => {
                warn!("Failed to restore records, starting with {:?} seed: {}", seed, e);
                seeded(seed)
            }
        };

        Self {
            records: RwLock::new(records.into()),
            kv,
        }
    }

    /// Prepends `record` and persists the whole collection.
    ///
    /// A failed write is logged; the in-memory insert stands.
    pub fn insert(&self, record: InternRecord) {
        let mut guard = self.records.write();
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(record);
        next.extend(guard.iter().cloned());
        *guard = next.into();

        if let Err(e) = persist(self.kv.as_ref(), &guard) {
            warn!("Failed to persist {} records: {}", guard.len(), e);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.records.read().clone()
    }

    /// Looks up a single record by id.
    pub fn get(&self, id: &str) -> Option<InternRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn seeded(seed: StartupSeed) -> Vec<InternRecord> {
    match seed {
        StartupSeed::Examples => example_records(Utc::now()),
        StartupSeed::Empty => Vec::new(),
    }
}

fn restore(kv: &dyn KeyValueStore) -> PortResult<Option<Vec<InternRecord>>> {
    match kv.load(STORAGE_KEY)? {
        Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
        None => Ok(None),
    }
}

fn persist(kv: &dyn KeyValueStore, records: &[InternRecord]) -> PortResult<()> {
    let blob = serde_json::to_string(records)?;
    debug!("Persisting {} bytes under '{}'", blob.len(), STORAGE_KEY);
    kv.save(STORAGE_KEY, &blob)
}
