//! # Cross-Section Property Formulas
//!
//! Geometric properties of a hollow circular tube (annulus). All inputs are in
//! consistent SI units (metres); outputs follow (m², m⁴, m).
//!
//! ## Notation
//!
//! - `D` = Outer diameter
//! - `d` = Inner diameter (0 for a solid rod)
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about a diameter
//! - `c` = Distance from neutral axis to extreme fibre
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Gere & Goodno, Mechanics of Materials, Appendix E

use std::f64::consts::PI;

// =============================================================================
// HOLLOW CIRCULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a hollow circular tube
///
/// ```text
///        ╭───────╮
///      ╭─╯ ╭───╮ ╰─╮
///      │   │ d │   │  D
///      ╰─╮ ╰───╯ ╭─╯
///        ╰───────╯
/// ```
///
/// # Formula
/// A = π(D² − d²)/4
///
/// # Example
/// ```rust
/// use spar_core::equations::section::tube_area;
///
/// let a = tube_area(0.02, 0.018);
/// assert!((a - 5.969e-5).abs() < 1e-8);
/// ```
#[inline]
pub fn tube_area(d_outer: f64, d_inner: f64) -> f64 {
    PI * (d_outer * d_outer - d_inner * d_inner) / 4.0
}

/// Second moment of area of a hollow circular tube about a diameter
///
/// # Formula
/// I = (π/64)(D⁴ − d⁴)
///
/// For a solid rod (d = 0) this reduces to I = πD⁴/64.
///
/// # Example
/// ```rust
/// use spar_core::equations::section::tube_moment_of_inertia;
///
/// // 20 mm OD, 18 mm ID carbon tube
/// let i = tube_moment_of_inertia(0.020, 0.018);
/// assert!((i - 2.701e-9).abs() < 1e-12);
/// ```
#[inline]
pub fn tube_moment_of_inertia(d_outer: f64, d_inner: f64) -> f64 {
    (PI / 64.0) * (d_outer.powi(4) - d_inner.powi(4))
}

/// Distance from the neutral axis to the extreme fibre: c = D/2
#[inline]
pub fn tube_extreme_fiber(d_outer: f64) -> f64 {
    d_outer / 2.0
}

/// Elastic section modulus S = I/c
#[inline]
pub fn tube_section_modulus(d_outer: f64, d_inner: f64) -> f64 {
    tube_moment_of_inertia(d_outer, d_inner) / tube_extreme_fiber(d_outer)
}

/// Combined second moment of area of spars sharing one neutral axis
///
/// # Formula
/// I_total = I₁ + I₂
///
/// # Assumption
/// Both spars bend together with equal curvature about the same axis. This is
/// a modeling simplification, not the parallel-axis theorem for a built-up
/// section.
#[inline]
pub fn combined_moment_of_inertia(i_1: f64, i_2: f64) -> f64 {
    i_1 + i_2
}
