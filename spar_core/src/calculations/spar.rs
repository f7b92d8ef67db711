//! # Spar Design Check
//!
//! Evaluates one tubular spar as a cantilever with a tip load: section
//! properties, root bending stress, tip deflection, average shear, mass and
//! (when the material has a yield strength) the safety factor.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::calculations::spar::{calculate_spar, SparInput};
//! use spar_core::loads::LoadCase;
//! use spar_core::materials::MaterialProperties;
//!
//! let spar = SparInput::new("Front", 20.0, 18.0);
//! let material = MaterialProperties::from_display_units(70.0, Some(276.0), 2.7).unwrap();
//! let load = LoadCase::new(100.0, 1.0).unwrap();
//!
//! let result = calculate_spar(&spar, &material, &load).unwrap();
//! assert!((result.tip_deflection_m - 0.1763).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    average_shear_stress, bending_stress, cantilever_point_max_moment, cantilever_tip_deflection,
    safety_factor, tube_mass,
};
use crate::errors::CalcResult;
use crate::geometry::TubeGeometry;
use crate::loads::LoadCase;
use crate::materials::MaterialProperties;
use crate::units::{Megapascals, Meters, Millimeters, Mm4, Pascals, M4};

/// Validated second moment of area of a tube given in millimetres (m⁴).
///
/// Never returns a non-positive inertia: anything that would produce one is
/// rejected as [`crate::errors::CalcError::InvalidGeometry`].
pub fn section_inertia(outer_diameter_mm: f64, inner_diameter_mm: f64) -> CalcResult<f64> {
    Ok(TubeGeometry::from_mm(outer_diameter_mm, inner_diameter_mm)?.moment_of_inertia_m4())
}

/// A spar tube as entered by the user (diameters in mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SparInput {
    /// User label, e.g. "Front" or "Rear"
    pub label: String,
    /// Outer diameter (mm)
    pub outer_diameter_mm: f64,
    /// Inner diameter (mm); 0 for a solid rod
    pub inner_diameter_mm: f64,
}

impl SparInput {
    pub fn new(label: impl Into<String>, outer_diameter_mm: f64, inner_diameter_mm: f64) -> Self {
        SparInput {
            label: label.into(),
            outer_diameter_mm,
            inner_diameter_mm,
        }
    }

    /// Validate the diameters and convert to SI
    pub fn geometry(&self) -> CalcResult<TubeGeometry> {
        TubeGeometry::from_mm_labeled(&self.label, self.outer_diameter_mm, self.inner_diameter_mm)
    }
}

/// Bending section used for stress and deflection.
///
/// For a spar analysed on its own this is just its tube. When spars are
/// assumed to share load, `moment_of_inertia_m4` is the summed inertia and
/// `extreme_fiber_m` the fibre distance of the spar the stress is reported on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendingSection {
    /// I (m⁴)
    pub moment_of_inertia_m4: f64,
    /// c (m)
    pub extreme_fiber_m: f64,
}

impl BendingSection {
    pub fn of_tube(tube: &TubeGeometry) -> Self {
        BendingSection {
            moment_of_inertia_m4: tube.moment_of_inertia_m4(),
            extreme_fiber_m: tube.extreme_fiber_m(),
        }
    }
}

/// Results for one spar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparResult {
    pub label: String,
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    /// Second moment of area of this tube alone (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Same, in mm⁴ for display
    pub moment_of_inertia_mm4: f64,
    /// Inertia used for stress and deflection (m⁴); differs from
    /// `moment_of_inertia_m4` only when spars share load
    pub bending_inertia_m4: f64,
    /// Root bending moment F·L (N·m)
    pub max_moment_nm: f64,
    /// Extreme-fibre bending stress at the root (Pa)
    pub max_bending_stress_pa: f64,
    /// Tip deflection (m)
    pub tip_deflection_m: f64,
    /// Average transverse shear stress (Pa)
    pub shear_stress_pa: f64,
    /// Tube mass over the span (kg)
    pub mass_kg: f64,
    /// Yield strength / stress. `None` when the material has no yield
    /// strength; infinite when the stress is not positive.
    #[serde(with = "crate::units::serde_ratio")]
    pub safety_factor: Option<f64>,
}

impl SparResult {
    pub fn max_bending_stress_mpa(&self) -> f64 {
        Megapascals::from(Pascals(self.max_bending_stress_pa)).value()
    }

    pub fn shear_stress_mpa(&self) -> f64 {
        Megapascals::from(Pascals(self.shear_stress_pa)).value()
    }

    pub fn tip_deflection_mm(&self) -> f64 {
        Millimeters::from(Meters(self.tip_deflection_m)).value()
    }

    pub fn mass_g(&self) -> f64 {
        self.mass_kg * 1000.0
    }

    /// `Some(true)` when the safety factor is at least 1.0
    pub fn passes_yield(&self) -> Option<bool> {
        self.safety_factor.map(|n| n >= 1.0)
    }
}

/// Evaluate a spar on its own.
pub fn calculate_spar(
    spar: &SparInput,
    material: &MaterialProperties,
    load: &LoadCase,
) -> CalcResult<SparResult> {
    let tube = spar.geometry()?;
    calculate_spar_with_section(&spar.label, &tube, &BendingSection::of_tube(&tube), material, load)
}

/// Evaluate a validated tube against an explicit bending section.
///
/// Shear and mass always come from `tube` itself.
pub fn calculate_spar_with_section(
    label: &str,
    tube: &TubeGeometry,
    section: &BendingSection,
    material: &MaterialProperties,
    load: &LoadCase,
) -> CalcResult<SparResult> {
    material.validate()?;
    load.validate()?;

    let f = load.tip_force_n;
    let l = load.span_m;
    let i = section.moment_of_inertia_m4;

    let stress = bending_stress(f, l, i, section.extreme_fiber_m);
    let own_inertia = tube.moment_of_inertia_m4();

    let result = SparResult {
        label: label.to_string(),
        outer_diameter_mm: tube.outer_diameter_mm(),
        inner_diameter_mm: tube.inner_diameter_mm(),
        moment_of_inertia_m4: own_inertia,
        moment_of_inertia_mm4: Mm4::from(M4(own_inertia)).value(),
        bending_inertia_m4: i,
        max_moment_nm: cantilever_point_max_moment(f, l),
        max_bending_stress_pa: stress,
        tip_deflection_m: cantilever_tip_deflection(f, l, material.youngs_modulus_pa, i),
        shear_stress_pa: average_shear_stress(f, tube.outer_diameter_m(), tube.inner_diameter_m()),
        mass_kg: tube_mass(
            tube.outer_diameter_m(),
            tube.inner_diameter_m(),
            l,
            material.density_kg_m3,
        ),
        safety_factor: material.yield_strength_pa.map(|fy| safety_factor(fy, stress)),
    };

    tracing::debug!(
        spar = label,
        stress_mpa = result.max_bending_stress_mpa(),
        tip_deflection_mm = result.tip_deflection_mm(),
        "evaluated spar"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn aluminium() -> MaterialProperties {
        MaterialProperties::new(70.0e9, Some(276.0e6), 2700.0).unwrap()
    }

    #[test]
    fn test_section_inertia_reference_tube() {
        let i = section_inertia(20.0, 18.0).unwrap();
        assert_relative_eq!(i, 2.700984e-9, max_relative = 1e-6);
    }

    #[test]
    fn test_section_inertia_rejects_bad_tube() {
        assert!(section_inertia(20.0, 20.0).is_err());
        assert!(section_inertia(0.0, 0.0).is_err());
    }

    #[test]
    fn test_reference_scenario() {
        // L = 1 m, F = 100 N, E = 70 GPa, 20/18 tube
        let spar = SparInput::new("Front", 20.0, 18.0);
        let load = LoadCase::new(100.0, 1.0).unwrap();
        let r = calculate_spar(&spar, &aluminium(), &load).unwrap();

        let i = 2.700984e-9;
        assert_relative_eq!(r.tip_deflection_m, 100.0 / (3.0 * 70.0e9 * i), max_relative = 1e-5);
        assert_relative_eq!(r.tip_deflection_m, 0.176303, max_relative = 1e-5);
        assert_relative_eq!(r.max_bending_stress_pa, 100.0 * 0.01 / i, max_relative = 1e-5);
        assert_relative_eq!(r.max_moment_nm, 100.0);
        assert_relative_eq!(r.moment_of_inertia_mm4, 2700.984, max_relative = 1e-6);
        assert_eq!(r.bending_inertia_m4, r.moment_of_inertia_m4);
    }

    #[test]
    fn test_safety_factor_follows_material() {
        let spar = SparInput::new("Front", 20.0, 18.0);
        let load = LoadCase::new(10.0, 1.0).unwrap();

        let r = calculate_spar(&spar, &aluminium(), &load).unwrap();
        let n = r.safety_factor.unwrap();
        assert_relative_eq!(n, 276.0e6 / r.max_bending_stress_pa, max_relative = 1e-12);
        assert_eq!(r.passes_yield(), Some(n >= 1.0));

        let no_yield = MaterialProperties::new(140.0e9, None, 1600.0).unwrap();
        let r = calculate_spar(&spar, &no_yield, &load).unwrap();
        assert_eq!(r.safety_factor, None);
        assert_eq!(r.passes_yield(), None);
    }

    #[test]
    fn test_zero_load_gives_infinite_safety() {
        let spar = SparInput::new("Front", 20.0, 18.0);
        let load = LoadCase::new(0.0, 1.0).unwrap();
        let r = calculate_spar(&spar, &aluminium(), &load).unwrap();
        assert_eq!(r.max_bending_stress_pa, 0.0);
        assert_eq!(r.tip_deflection_m, 0.0);
        assert_eq!(r.safety_factor, Some(f64::INFINITY));
    }

    #[test]
    fn test_shared_section_keeps_own_shear_and_mass() {
        let front = TubeGeometry::from_mm(20.0, 18.0).unwrap();
        let rear = TubeGeometry::from_mm(10.0, 8.0).unwrap();
        let shared = BendingSection {
            moment_of_inertia_m4: front.moment_of_inertia_m4() + rear.moment_of_inertia_m4(),
            extreme_fiber_m: front.extreme_fiber_m(),
        };
        let load = LoadCase::new(60.0, 1.3).unwrap();

        let alone = calculate_spar_with_section("Front", &front, &BendingSection::of_tube(&front), &aluminium(), &load)
            .unwrap();
        let combined = calculate_spar_with_section("Front", &front, &shared, &aluminium(), &load).unwrap();

        assert!(combined.max_bending_stress_pa < alone.max_bending_stress_pa);
        assert!(combined.tip_deflection_m < alone.tip_deflection_m);
        assert_eq!(combined.shear_stress_pa, alone.shear_stress_pa);
        assert_eq!(combined.mass_kg, alone.mass_kg);
    }

    #[test]
    fn test_result_json_writes_infinite_safety_as_string() {
        let spar = SparInput::new("Front", 20.0, 18.0);
        let load = LoadCase::new(0.0, 1.0).unwrap();
        let r = calculate_spar(&spar, &aluminium(), &load).unwrap();

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""safety_factor":"inf""#));
        let back: SparResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.safety_factor, Some(f64::INFINITY));
    }
}
