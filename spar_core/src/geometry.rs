//! # Tube Geometry
//!
//! Validated hollow circular cross-section. This is the single place where
//! diameters are converted from millimetres (how tubes are specified and sold)
//! to metres (what every formula in [`crate::equations`] expects). Once a
//! [`TubeGeometry`] exists its wall thickness is strictly positive, so no
//! downstream calculation can see a zero or negative inertia.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::geometry::TubeGeometry;
//!
//! let tube = TubeGeometry::from_mm(20.0, 18.0).unwrap();
//! assert!((tube.wall_thickness_mm() - 1.0).abs() < 1e-12);
//!
//! // Inner diameter must be smaller than outer diameter
//! assert!(TubeGeometry::from_mm(20.0, 20.0).is_err());
//! ```

use serde::Serialize;

use crate::equations::section::{tube_area, tube_extreme_fiber, tube_moment_of_inertia};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Hollow circular tube, stored in SI metres.
///
/// Only constructible through [`TubeGeometry::from_mm`] /
/// [`TubeGeometry::from_mm_labeled`], which enforce `0 ≤ ID < OD`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TubeGeometry {
    outer_diameter_m: f64,
    inner_diameter_m: f64,
}

impl TubeGeometry {
    /// Validate diameters given in millimetres and convert them to metres.
    pub fn from_mm(outer_diameter_mm: f64, inner_diameter_mm: f64) -> CalcResult<Self> {
        Self::from_mm_labeled("tube", outer_diameter_mm, inner_diameter_mm)
    }

    /// Same as [`TubeGeometry::from_mm`], naming the spar in any error.
    pub fn from_mm_labeled(label: &str, outer_diameter_mm: f64, inner_diameter_mm: f64) -> CalcResult<Self> {
        let reject = |reason: &str| -> CalcResult<Self> {
            tracing::warn!(
                spar = label,
                outer_diameter_mm,
                inner_diameter_mm,
                reason,
                "rejected tube geometry"
            );
            Err(CalcError::invalid_geometry(label, outer_diameter_mm, inner_diameter_mm, reason))
        };

        if !outer_diameter_mm.is_finite() || !inner_diameter_mm.is_finite() {
            return reject("Diameters must be finite numbers");
        }
        if outer_diameter_mm <= 0.0 {
            return reject("Outer diameter must be positive");
        }
        if inner_diameter_mm < 0.0 {
            return reject("Inner diameter cannot be negative");
        }
        if inner_diameter_mm >= outer_diameter_mm {
            return reject("Inner diameter must be smaller than outer diameter");
        }

        let geometry = TubeGeometry {
            outer_diameter_m: Meters::from(Millimeters(outer_diameter_mm)).value(),
            inner_diameter_m: Meters::from(Millimeters(inner_diameter_mm)).value(),
        };

        // D⁴ − d⁴ can underflow for hair-thin walls or overflow for huge diameters.
        let inertia = geometry.moment_of_inertia_m4();
        if !(inertia.is_finite() && inertia > 0.0) {
            return reject("Section inertia is not a positive finite number");
        }

        Ok(geometry)
    }

    pub fn outer_diameter_m(&self) -> f64 {
        self.outer_diameter_m
    }

    pub fn inner_diameter_m(&self) -> f64 {
        self.inner_diameter_m
    }

    pub fn outer_diameter_mm(&self) -> f64 {
        Millimeters::from(Meters(self.outer_diameter_m)).value()
    }

    pub fn inner_diameter_mm(&self) -> f64 {
        Millimeters::from(Meters(self.inner_diameter_m)).value()
    }

    /// Wall thickness (OD − ID)/2 in millimetres
    pub fn wall_thickness_mm(&self) -> f64 {
        (self.outer_diameter_mm() - self.inner_diameter_mm()) / 2.0
    }

    /// True when the tube has no bore
    pub fn is_solid(&self) -> bool {
        self.inner_diameter_m == 0.0
    }

    /// Cross-sectional area (m²)
    pub fn area_m2(&self) -> f64 {
        tube_area(self.outer_diameter_m, self.inner_diameter_m)
    }

    /// Second moment of area about a diameter (m⁴)
    pub fn moment_of_inertia_m4(&self) -> f64 {
        tube_moment_of_inertia(self.outer_diameter_m, self.inner_diameter_m)
    }

    /// Neutral axis to extreme fibre, c = OD/2 (m)
    pub fn extreme_fiber_m(&self) -> f64 {
        tube_extreme_fiber(self.outer_diameter_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_converts_once_to_metres() {
        let tube = TubeGeometry::from_mm(20.0, 18.0).unwrap();
        assert_relative_eq!(tube.outer_diameter_m(), 0.020);
        assert_relative_eq!(tube.inner_diameter_m(), 0.018);
        assert_relative_eq!(tube.outer_diameter_mm(), 20.0);
        assert_relative_eq!(tube.extreme_fiber_m(), 0.010);
    }

    #[test]
    fn test_inertia_in_m4() {
        let tube = TubeGeometry::from_mm(20.0, 18.0).unwrap();
        let expected = (PI / 64.0) * (0.020_f64.powi(4) - 0.018_f64.powi(4));
        assert_relative_eq!(tube.moment_of_inertia_m4(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_solid_rod_allowed() {
        let rod = TubeGeometry::from_mm(8.0, 0.0).unwrap();
        assert!(rod.is_solid());
        assert_relative_eq!(rod.moment_of_inertia_m4(), PI * 0.008_f64.powi(4) / 64.0);
    }

    #[test]
    fn test_rejects_inner_not_smaller() {
        let err = TubeGeometry::from_mm_labeled("Front", 20.0, 20.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        match err {
            CalcError::InvalidGeometry { spar, .. } => assert_eq!(spar, "Front"),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(TubeGeometry::from_mm(20.0, 25.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive_outer() {
        assert!(TubeGeometry::from_mm(0.0, 0.0).is_err());
        assert!(TubeGeometry::from_mm(-5.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_inertia() {
        // D⁴ overflows: inf − inf is NaN, inf − 0 is inf
        for (od, id) in [(1.0e300, 5.0e299), (1.0e300, 0.0)] {
            let err = TubeGeometry::from_mm(od, id).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        }
        assert!(crate::calculations::spar::section_inertia(1.0e300, 5.0e299).is_err());
    }

    #[test]
    fn test_rejects_negative_inner_and_nan() {
        assert!(TubeGeometry::from_mm(10.0, -1.0).is_err());
        assert!(TubeGeometry::from_mm(f64::NAN, 1.0).is_err());
        assert!(TubeGeometry::from_mm(10.0, f64::INFINITY).is_err());
    }
}
