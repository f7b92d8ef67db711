//! # Spar Calculations
//!
//! Each calculation follows the same shape:
//!
//! - inputs are plain serde types ([`spar::SparInput`], [`crate::config::AnalysisConfig`])
//! - results are serde types ([`spar::SparResult`], [`analysis::AnalysisResult`])
//! - the calculation is a pure function returning [`crate::errors::CalcResult`]
//!
//! ## Available Calculations
//!
//! - [`spar`] - Single tube as a cantilever with a tip load
//! - [`sweep`] - Span profile and load sweep curves
//! - [`analysis`] - Full wing analysis from a configuration

pub mod analysis;
pub mod spar;
pub mod sweep;

pub use analysis::{analyze, AnalysisResult, InertiaMode, LabeledSpanProfile};
pub use spar::{calculate_spar, calculate_spar_with_section, section_inertia, BendingSection, SparInput, SparResult};
pub use sweep::{
    linspace, sweep_over_load, sweep_over_span, LoadSweep, SpanProfile, SparLoadSeries, SweepSection, SweepSeries,
};
