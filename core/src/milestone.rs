//! Milestone checklist — fixed revenue thresholds marked off as the
//! total passes them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    pub threshold: f64,
    pub reached: bool,
}

pub fn milestone_status(total_mrr: f64, thresholds: &[f64]) -> Vec<MilestoneStatus> {
    thresholds
        .iter()
        .map(|&threshold| MilestoneStatus {
            threshold,
            reached: total_mrr >= threshold,
        })
        .collect()
}
