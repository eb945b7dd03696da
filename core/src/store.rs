//! Customer persistence.
//!
//! RULE: Only store.rs reads or writes the stored customer list.
//! Everything else goes through the `CustomerStore` trait.
//!
//! The list is a single JSON document under a fixed key (a file name in
//! the data directory). Corrupt or absent data both read back as `None`,
//! which the desk treats as a first run and answers with the seed set.

use crate::{customer::CustomerRecord, error::DeskResult};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub trait CustomerStore {
    /// `Ok(None)` means no usable saved data (first run).
    fn load(&self) -> DeskResult<Option<Vec<CustomerRecord>>>;
    fn save(&self, records: &[CustomerRecord]) -> DeskResult<()>;
    /// Remove the stored key entirely. Not an error when already absent.
    fn clear(&self) -> DeskResult<()>;
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store keyed by `storage_key` under `data_dir`, creating the
    /// directory if needed.
    pub fn open(data_dir: &Path, storage_key: &str) -> DeskResult<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(storage_key),
        })
    }
}

impl CustomerStore for FileStore {
    fn load(&self) -> DeskResult<Option<Vec<CustomerRecord>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                log::warn!(
                    "stored customer data at {} is unreadable ({e}); treating as first run",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, records: &[CustomerRecord]) -> DeskResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        log::debug!("saved {} customers to {}", records.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> DeskResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store (used in tests). Clones share the same slot, so a test
/// can hand one handle to the desk and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<Vec<CustomerRecord>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CustomerRecord>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(records))),
        }
    }
}

impl CustomerStore for MemoryStore {
    fn load(&self) -> DeskResult<Option<Vec<CustomerRecord>>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, records: &[CustomerRecord]) -> DeskResult<()> {
        *self.slot.borrow_mut() = Some(records.to_vec());
        Ok(())
    }

    fn clear(&self) -> DeskResult<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
