//! segmenta-core — core library for the segmenta analytics gateway.
//!
//! This crate holds the two pieces of the system that are pure state and
//! types, free of any I/O:
//!
//! - [`filters`] — the committed/draft filter store backing the dashboard's
//!   interactive filter panel.
//! - [`types`] — the JSON shapes the upstream analytics backend produces.
//! - [`config`] — process-wide configuration (upstream base URL, bind
//!   address).
//!
//! The HTTP surface lives in `segmenta-gateway`; it depends on this crate,
//! never the other way around.

pub mod config;
pub mod filters;
pub mod types;

pub use filters::{ActiveFilter, FilterConfig, FilterKind, FilterStore, FilterUpdate};
pub use types::{KpiSummary, SalesTrendPoint, SegmentSummaryRow};
