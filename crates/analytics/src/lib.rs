//! # Vantage Analytics Engine
//!
//! This crate provides the tools for deriving summary and trend metrics from
//! a series of periodic cost observations. It is the single source of every
//! number the reports, charts, and dashboard display.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It takes an `ObservationSeries` as input and produces
//!   derived records as output, recomputing from scratch on every call.
//!   This makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `SummaryStatistics`, `TrendRecord`, `TargetComparison`: The derived
//!   records consumed by every presentation layer.
//! - `AnalyticsError`: The specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{
    GrowthTransition, ObservationGap, PeriodGrowth, SummaryStatistics, TargetComparison,
    TrendRecord,
};
