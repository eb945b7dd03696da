//! Shared primitive types used across the tracker.

/// A stable, unique identifier for a customer record (UUID v4 text).
pub type CustomerId = String;

/// One period = one month, the unit of growth projection and
/// time-to-target calculation.
pub type Period = u32;
