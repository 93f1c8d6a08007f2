//! Report module
//!
//! Joins routes, destinations and quick-connect wiring into flat rows and
//! writes them as CSV.
//!
//! Row order is fixed: route rows grouped by worker group in fetch order,
//! routes in table order, then every quick-connect row.

mod builder;
mod writer;

pub use builder::{build_report, ReportRow};
pub use writer::{rows_to_batch, write_csv, write_report};
