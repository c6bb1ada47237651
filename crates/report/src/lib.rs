//! # Vantage Report Renderer
//!
//! Turns the analytics engine's derived records into the written analysis
//! document: quarterly performance tables, statistical summary, trend
//! narrative, and the strategic recommendations for executive review.
//!
//! This crate performs no computation of its own beyond string templating;
//! every figure it prints comes from an `analytics` record.

pub mod error;
pub mod insights;
pub mod renderer;

pub use error::ReportError;
pub use renderer::{REPORT_FILENAME, ReportRenderer};
