//! First-run sample dataset. Used whenever the store has no readable
//! customer data.

use crate::customer::CustomerRecord;
use chrono::NaiveDate;

pub fn sample_customers() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord {
            id: "1".into(),
            name: "Acme Corp".into(),
            mrr: 99.0,
            plan: "Pro".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        },
        CustomerRecord {
            id: "2".into(),
            name: "TechStart Inc".into(),
            mrr: 49.0,
            plan: "Starter".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
        },
        CustomerRecord {
            id: "3".into(),
            name: "Growth Labs".into(),
            mrr: 199.0,
            plan: "Business".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        },
    ]
}
