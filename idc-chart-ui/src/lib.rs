//! Dioxus components and browser bridge for the industry distribution chart.
//!
//! This crate provides:
//! - `js_bridge`: fetch, clock and animation-frame wrappers over `web-sys` / `js-sys`
//! - `state`: reactive `AppState` with Dioxus Signals and the frame loop
//! - `components`: SVG chart pieces, tooltip and the sort control

pub mod js_bridge;
pub mod state;
pub mod components;
