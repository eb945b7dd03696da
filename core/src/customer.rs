//! Customer records and the book that holds them.
//!
//! The book is an insertion-ordered sequence. Order is a display concern
//! only — the metrics engine is order-independent (a sum and a count).
//! Records are immutable once admitted; an edit is modeled as remove + add.

use crate::types::CustomerId;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Plan label applied when the draft leaves the field blank.
pub const DEFAULT_PLAN: &str = "Standard";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    /// Recurring fee charged per month. Finite and non-negative for every
    /// record admitted through `CustomerBook::add`.
    pub mrr: f64,
    pub plan: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
}

/// Raw form input. `mrr` is text and must parse to a finite non-negative
/// number before a record is created from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub mrr: String,
    #[serde(default)]
    pub plan: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerBook {
    records: Vec<CustomerRecord>,
}

impl CustomerBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Admit a draft. Returns the new record, or `None` (no mutation) when
    /// the trimmed name is empty or the fee does not parse to a finite
    /// non-negative number. New entries go at the end.
    pub fn add(&mut self, draft: &CustomerDraft) -> Option<&CustomerRecord> {
        let name = draft.name.trim();
        if name.is_empty() {
            return None;
        }
        let mrr: f64 = draft.mrr.trim().parse().ok()?;
        // "NaN" and "inf" parse successfully, so finiteness is a separate check.
        if !mrr.is_finite() || mrr < 0.0 {
            return None;
        }

        let plan = match draft.plan.trim() {
            "" => DEFAULT_PLAN.to_string(),
            p => p.to_string(),
        };

        self.records.push(CustomerRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            mrr,
            plan,
            start_date: Local::now().date_naive(),
        });
        self.records.last()
    }

    /// Remove by id. `false` (not an error) when absent; survivor order is
    /// preserved either way.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|c| c.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
