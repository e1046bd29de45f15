//! Core library for the HomeAnalyzer service.
//!
//! The [`analysis`] module owns the domain model, intake validation, the deal
//! evaluator, and the trait seams for the valuation model and comparable-sales
//! lookup. [`config`] and [`telemetry`] cover the ambient runtime concerns.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
