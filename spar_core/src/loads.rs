//! # Load Case
//!
//! A single transverse point load at the free end of a cantilever spar.
//!
//! ## Half-Wing Loading
//!
//! A wing is two cantilevers joined at the fuselage. When the total lift of
//! the aircraft is known, each half-span spar carries half of it; use
//! [`LoadCase::half_wing`] for that convention.
//!
//! ```rust
//! use spar_core::loads::LoadCase;
//!
//! let load = LoadCase::half_wing(120.0, 1.3).unwrap();
//! assert_eq!(load.tip_force_n, 60.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Tip load and span of a cantilever spar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Transverse force at the tip (N). Zero and negative values are valid.
    pub tip_force_n: f64,
    /// Cantilever span from root to tip (m)
    pub span_m: f64,
}

impl LoadCase {
    /// Create a validated load case
    pub fn new(tip_force_n: f64, span_m: f64) -> CalcResult<Self> {
        let load = LoadCase { tip_force_n, span_m };
        load.validate()?;
        Ok(load)
    }

    /// Load case for one half of a wing carrying `total_lift_n` in total
    pub fn half_wing(total_lift_n: f64, half_span_m: f64) -> CalcResult<Self> {
        Self::new(total_lift_n / 2.0, half_span_m)
    }

    /// Check the span is positive and the force finite
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        if !self.tip_force_n.is_finite() {
            return Err(CalcError::invalid_input(
                "tip_force_n",
                self.tip_force_n.to_string(),
                "Force must be a finite number",
            ));
        }
        Ok(())
    }

    /// Root bending moment M = F·L (N·m)
    pub fn root_moment_nm(&self) -> f64 {
        crate::equations::beam::cantilever_point_max_moment(self.tip_force_n, self.span_m)
    }
}
