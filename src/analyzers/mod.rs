//! Survey data aggregation and chart normalization.
//!
//! This module buckets canonical records by every grouping kind, computes
//! per-bucket indicator means, and derives the normalization metadata the
//! chart layer uses for stacked weighting.

pub mod aggregate;
pub mod normalize;
pub mod types;
pub mod utility;
