//! # spar_core - Wing Spar Bending Engine
//!
//! `spar_core` sizes the tubular spars of a small fixed-wing aircraft. Each
//! half-wing spar is modeled as a cantilever fixed at the root with a point
//! load at the tip, and checked for bending stress, tip deflection, shear,
//! mass and safety against yield.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **One Unit Boundary**: Millimetres, GPa and g/cm³ are converted to SI
//!   when inputs are validated; everything past that point is SI
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use spar_core::{analyze, AnalysisConfig};
//!
//! let result = analyze(&AnalysisConfig::default()).unwrap();
//! for spar in &result.spars {
//!     println!("{}: {:.1} MPa, {:.1} mm", spar.label, spar.max_bending_stress_mpa(), spar.tip_deflection_mm());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Spar checks, sweeps and the full analysis
//! - [`config`] - Analysis configuration and JSON loading
//! - [`equations`] - Pure formula functions and their registry
//! - [`export`] - Load sweep CSV export
//! - [`geometry`] - Validated tube cross-sections
//! - [`loads`] - Tip load cases
//! - [`materials`] - Material properties and presets
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisResult, InertiaMode, SparInput, SparResult};
pub use config::{load_config, AnalysisConfig, LoadSpec};
pub use errors::{CalcError, CalcResult};
pub use export::{load_sweep_to_csv, parse_load_sweep_csv, save_load_sweep_csv, LoadSweepTable};
pub use geometry::TubeGeometry;
pub use loads::LoadCase;
pub use materials::{MaterialPreset, MaterialProperties, MaterialSpec};
