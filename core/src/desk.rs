//! The desk — owns the customer book, the two scalar parameters, and the
//! current metrics snapshot.
//!
//! RULES:
//!   - Every mutation recomputes the metrics before returning; callers
//!     always observe a snapshot consistent with the book.
//!   - Book changes persist through the injected store. The store is only
//!     written with a non-empty list on ordinary mutation; `clear_all` is
//!     the one path that erases the stored key.

use crate::{
    config::DeskConfig,
    customer::{CustomerBook, CustomerDraft, CustomerRecord},
    error::DeskResult,
    metrics::{compute_metrics, DeskMetrics},
    milestone::{milestone_status, MilestoneStatus},
    seed,
    store::CustomerStore,
    types::CustomerId,
};

pub struct Desk {
    book: CustomerBook,
    target_mrr: f64,
    growth_rate_pct: f64,
    milestones: Vec<f64>,
    metrics: DeskMetrics,
    store: Box<dyn CustomerStore>,
}

impl Desk {
    /// Load the book from the store, seeding (and persisting) the sample
    /// dataset when no usable saved data exists. Metrics are computed
    /// before this returns.
    pub fn open(store: Box<dyn CustomerStore>, config: &DeskConfig) -> DeskResult<Self> {
        let book = match store.load()? {
            Some(records) => {
                log::info!("loaded {} customers", records.len());
                CustomerBook::from_records(records)
            }
            None => {
                let samples = seed::sample_customers();
                log::info!("no saved data; seeding {} sample customers", samples.len());
                store.save(&samples)?;
                CustomerBook::from_records(samples)
            }
        };

        let metrics = compute_metrics(book.records(), config.target_mrr, config.growth_rate_pct);
        Ok(Self {
            book,
            target_mrr: config.target_mrr,
            growth_rate_pct: config.growth_rate_pct,
            milestones: config.milestones.clone(),
            metrics,
            store,
        })
    }

    pub fn metrics(&self) -> &DeskMetrics {
        &self.metrics
    }

    pub fn customers(&self) -> &[CustomerRecord] {
        self.book.records()
    }

    pub fn target_mrr(&self) -> f64 {
        self.target_mrr
    }

    pub fn growth_rate_pct(&self) -> f64 {
        self.growth_rate_pct
    }

    pub fn milestones(&self) -> Vec<MilestoneStatus> {
        milestone_status(self.metrics.total_mrr, &self.milestones)
    }

    /// Admit a draft. `Ok(None)` means the draft was rejected and nothing
    /// changed — not an error, per the silent-reject contract.
    pub fn add_customer(&mut self, draft: &CustomerDraft) -> DeskResult<Option<CustomerId>> {
        let id = match self.book.add(draft) {
            Some(record) => record.id.clone(),
            None => {
                log::debug!("rejected customer draft: {:?}", draft.name);
                return Ok(None);
            }
        };
        self.persist()?;
        self.recompute();
        Ok(Some(id))
    }

    /// Remove by id. `false` when no such record existed (no-op).
    pub fn remove_customer(&mut self, id: &str) -> DeskResult<bool> {
        if !self.book.remove(id) {
            return Ok(false);
        }
        self.persist()?;
        self.recompute();
        Ok(true)
    }

    /// Empty the book and erase the stored key.
    pub fn clear_all(&mut self) -> DeskResult<()> {
        self.book.clear();
        self.store.clear()?;
        self.recompute();
        log::info!("cleared all customers");
        Ok(())
    }

    pub fn set_target(&mut self, target_mrr: f64) {
        self.target_mrr = target_mrr;
        self.recompute();
    }

    pub fn set_growth_rate(&mut self, growth_rate_pct: f64) {
        self.growth_rate_pct = growth_rate_pct;
        self.recompute();
    }

    fn persist(&self) -> DeskResult<()> {
        // Empty lists are never written here; clear_all is the erase path.
        if self.book.is_empty() {
            return Ok(());
        }
        self.store.save(self.book.records())
    }

    fn recompute(&mut self) {
        self.metrics = compute_metrics(self.book.records(), self.target_mrr, self.growth_rate_pct);
    }
}
