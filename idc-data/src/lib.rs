//! Record loading and category aggregation for the industry distribution chart.
//!
//! This crate is free of any browser dependency so the data path can be
//! exercised with plain `cargo test`:
//!
//! - [`record`]: parse the fetched CSV text into [`record::Record`]s
//! - [`aggregate`]: group-by-count into [`aggregate::AggregatedPoint`]s and sort them
//! - [`error`]: the single [`error::LoadError`] kind raised while loading
//!
//! # Usage
//!
//! ```rust
//! use idc_data::aggregate::{aggregate, sort_points, SortMode};
//! use idc_data::record::parse_records;
//!
//! let records = parse_records("Industry\nSaaS\nFintech\nSaaS\n", "Industry").unwrap();
//! let mut points = aggregate(&records, "Unspecified");
//! sort_points(&mut points, SortMode::Descending);
//! assert_eq!(points[0].category, "SaaS");
//! assert_eq!(points[0].count, 2);
//! ```

pub mod aggregate;
pub mod error;
pub mod record;

pub use aggregate::{AggregatedPoint, SortMode};
pub use error::LoadError;
pub use record::Record;
