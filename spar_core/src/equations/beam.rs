//! # Cantilever Beam Formulas
//!
//! Closed-form equations for a prismatic cantilever, fixed at x = 0 and free
//! at x = L, carrying a single transverse point load P at the tip.
//!
//! ```text
//!    ▓┃
//!    ▓┣━━━━━━━━━━━━━━━━━━━┓
//!    ▓┃                   ↓ P
//!    ▓┃←──────── L ───────→
//!   fixed                free
//! ```
//!
//! ## Notation
//!
//! - `L` = Span (fixed end to tip)
//! - `x` = Position measured from the fixed end
//! - `P` = Tip load
//! - `E` = Young's modulus
//! - `I` = Second moment of area
//! - `c` = Distance from neutral axis to extreme fibre
//!
//! ## Sign Conventions
//!
//! - Load, moment and deflection carry the sign of `P`; a negative load
//!   produces negative moment and deflection.
//!
//! ## Validity
//!
//! Linear-elastic material, small deflections, prismatic beam. The formulas
//! must not be applied outside that regime.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 1a
//!   (cantilever end load)

use std::f64::consts::PI;

// =============================================================================
// MOMENT
// =============================================================================

/// Bending moment at position x for a cantilever with tip load
///
/// # Formula
/// M(x) = P(L − x)
///
/// - At the fixed end (x = 0): M = PL (maximum)
/// - At the tip (x = L): M = 0
#[inline]
pub fn cantilever_point_moment(p: f64, l: f64, x: f64) -> f64 {
    p * (l - x)
}

/// Fixed-end (maximum) moment: M_max = PL
#[inline]
pub fn cantilever_point_max_moment(p: f64, l: f64) -> f64 {
    p * l
}

// =============================================================================
// DEFLECTION
// =============================================================================

/// Deflection at position x for a cantilever with tip load
///
/// # Formula (Roark's Table 8.1, Case 1a)
/// ```text
/// δ(x) = P x² (3L − x) / (6EI)
/// ```
///
/// At x = L this equals the tip deflection PL³/(3EI).
#[inline]
pub fn cantilever_point_deflection(p: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    p * x * x * (3.0 * l - x) / (6.0 * e * i)
}

/// Tip deflection of a cantilever with tip load
///
/// # Formula
/// δ_max = PL³ / (3EI)
///
/// # Example
/// ```rust
/// use spar_core::equations::beam::cantilever_tip_deflection;
///
/// let d = cantilever_tip_deflection(100.0, 1.0, 70.0e9, 2.7e-9);
/// assert!((d - 100.0 / (3.0 * 70.0e9 * 2.7e-9)).abs() < 1e-12);
/// ```
#[inline]
pub fn cantilever_tip_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (3.0 * e * i)
}

// =============================================================================
// STRESS
// =============================================================================

/// Maximum bending stress at the fixed end, extreme fibre
///
/// # Formula
/// σ = M c / I = P L c / I
#[inline]
pub fn bending_stress(p: f64, l: f64, i: f64, c: f64) -> f64 {
    p * l * c / i
}

/// Average transverse shear stress over an annular section
///
/// # Formula
/// τ_avg = P / (π(r_o² − r_i²))
///
/// # Note
/// This is the average over the whole section, not the peak shear at the
/// neutral axis (which for a thin tube is about twice the average).
#[inline]
pub fn average_shear_stress(p: f64, d_outer: f64, d_inner: f64) -> f64 {
    let r_o = d_outer / 2.0;
    let r_i = d_inner / 2.0;
    p / (PI * (r_o * r_o - r_i * r_i))
}

// =============================================================================
// MASS / SAFETY
// =============================================================================

/// Mass of a straight tube
///
/// # Formula
/// m = π(D² − d²)/4 · L · ρ
#[inline]
pub fn tube_mass(d_outer: f64, d_inner: f64, l: f64, density: f64) -> f64 {
    PI * (d_outer * d_outer - d_inner * d_inner) / 4.0 * l * density
}

/// Factor of safety against yield
///
/// # Formula
/// n = σ_y / σ for σ > 0
///
/// Returns `f64::INFINITY` when σ ≤ 0. The infinity is a sentinel meaning
/// "no tensile stress to fail on", not a computed physical quantity.
#[inline]
pub fn safety_factor(yield_strength: f64, stress: f64) -> f64 {
    if stress > 0.0 {
        yield_strength / stress
    } else {
        f64::INFINITY
    }
}
