//! Desk configuration — storage key, default parameters, milestones.
//!
//! Loaded from an optional `desk.json` in the data directory. An absent
//! file means defaults; a malformed file is a real error (unlike customer
//! data, which falls back to the seed set — see store.rs).

use crate::error::DeskResult;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

pub const CONFIG_FILE: &str = "desk.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Fixed key the customer list is stored under (file name in data_dir).
    pub storage_key: String,
    pub target_mrr: f64,
    pub growth_rate_pct: f64,
    pub currency_symbol: String,
    /// Revenue thresholds for the milestone checklist, ascending.
    pub milestones: Vec<f64>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            storage_key: "mrr_customers.json".into(),
            target_mrr: 10_000.0,
            growth_rate_pct: 15.0,
            currency_symbol: "£".into(),
            milestones: vec![1_000.0, 5_000.0, 10_000.0, 25_000.0, 50_000.0],
        }
    }
}

impl DeskConfig {
    pub fn load(data_dir: &Path) -> DeskResult<Self> {
        let path = data_dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
