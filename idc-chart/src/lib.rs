//! Chart state, scales, reconciliation and interaction for the industry
//! distribution chart.
//!
//! This crate holds everything that does not need a browser:
//! - `config`: [`config::ChartConfig`] with serde defaults and validation
//! - `controller`: [`controller::ChartController`], the single owner of chart state
//! - `page`: [`page::ChartPage`], loading / failed / ready lifecycle
//! - `scale`, `axis`: band and linear scales and their tick models
//! - `scene`, `transition`: keyed bar reconciliation and eased interpolation
//! - `palette`, `tooltip`, `format`: colors, hover tooltip and number labels
//!
//! The Dioxus layer in `idc-chart-ui` only forwards events and draws frames.

pub mod axis;
pub mod config;
pub mod controller;
pub mod format;
pub mod page;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod tooltip;
pub mod transition;

pub use config::ChartConfig;
pub use controller::{ChartController, ChartState};
pub use page::ChartPage;
