//! # Materials
//!
//! Elastic and strength properties of the spar tube material, plus a few
//! presets for common UAV spar stock.
//!
//! ## JSON Serialization
//!
//! In a configuration file a material is either a preset or explicit values in
//! display units (GPa, MPa, g/cm³):
//!
//! ```json
//! { "type": "Preset", "preset": "Aluminum6061T6" }
//!
//! { "type": "Custom", "youngs_modulus_gpa": 140.0, "yield_strength_mpa": null, "density_g_cm3": 1.6 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{GPerCm3, Gigapascals, KgPerM3, Megapascals, Pascals};

/// Material properties in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Young's modulus E (Pa)
    pub youngs_modulus_pa: f64,
    /// Yield strength (Pa). `None` when the material has no meaningful
    /// yield point; the safety factor is then not reported.
    pub yield_strength_pa: Option<f64>,
    /// Density ρ (kg/m³)
    pub density_kg_m3: f64,
}

impl MaterialProperties {
    /// Create validated properties from SI values.
    pub fn new(youngs_modulus_pa: f64, yield_strength_pa: Option<f64>, density_kg_m3: f64) -> CalcResult<Self> {
        let props = MaterialProperties {
            youngs_modulus_pa,
            yield_strength_pa,
            density_kg_m3,
        };
        props.validate()?;
        Ok(props)
    }

    /// Create validated properties from display units (GPa, MPa, g/cm³).
    pub fn from_display_units(
        youngs_modulus_gpa: f64,
        yield_strength_mpa: Option<f64>,
        density_g_cm3: f64,
    ) -> CalcResult<Self> {
        Self::new(
            Pascals::from(Gigapascals(youngs_modulus_gpa)).value(),
            yield_strength_mpa.map(|mpa| Pascals::from(Megapascals(mpa)).value()),
            KgPerM3::from(GPerCm3(density_g_cm3)).value(),
        )
    }

    /// Check E > 0, yield ≥ 0 and density ≥ 0 (all finite).
    pub fn validate(&self) -> CalcResult<()> {
        if !self.youngs_modulus_pa.is_finite() || self.youngs_modulus_pa <= 0.0 {
            return Err(CalcError::invalid_input(
                "youngs_modulus_pa",
                self.youngs_modulus_pa.to_string(),
                "Young's modulus must be positive",
            ));
        }
        if let Some(fy) = self.yield_strength_pa {
            if !fy.is_finite() || fy < 0.0 {
                return Err(CalcError::invalid_input(
                    "yield_strength_pa",
                    fy.to_string(),
                    "Yield strength cannot be negative",
                ));
            }
        }
        if !self.density_kg_m3.is_finite() || self.density_kg_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "density_kg_m3",
                self.density_kg_m3.to_string(),
                "Density cannot be negative",
            ));
        }
        Ok(())
    }

    pub fn youngs_modulus_gpa(&self) -> f64 {
        Gigapascals::from(Pascals(self.youngs_modulus_pa)).value()
    }

    pub fn yield_strength_mpa(&self) -> Option<f64> {
        self.yield_strength_pa
            .map(|fy| Megapascals::from(Pascals(fy)).value())
    }

    pub fn density_g_cm3(&self) -> f64 {
        GPerCm3::from(KgPerM3(self.density_kg_m3)).value()
    }
}

/// Common spar tube materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialPreset {
    /// Pultruded/roll-wrapped carbon fibre tube (E = 140 GPa, 1.6 g/cm³).
    ///
    /// Composites fail by fibre rupture or local buckling rather than
    /// yielding, so no yield strength is given.
    CarbonFiberTube,
    /// Aluminium 6061-T6 drawn tube
    Aluminum6061T6,
    /// 4130 chromoly steel tube, normalized
    Steel4130,
}

impl MaterialPreset {
    /// SI properties for this preset
    pub fn properties(&self) -> MaterialProperties {
        match self {
            MaterialPreset::CarbonFiberTube => MaterialProperties {
                youngs_modulus_pa: 140.0e9,
                yield_strength_pa: None,
                density_kg_m3: 1600.0,
            },
            MaterialPreset::Aluminum6061T6 => MaterialProperties {
                youngs_modulus_pa: 68.9e9,
                yield_strength_pa: Some(276.0e6),
                density_kg_m3: 2700.0,
            },
            MaterialPreset::Steel4130 => MaterialProperties {
                youngs_modulus_pa: 205.0e9,
                yield_strength_pa: Some(435.0e6),
                density_kg_m3: 7850.0,
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialPreset::CarbonFiberTube => "Carbon fibre tube",
            MaterialPreset::Aluminum6061T6 => "Aluminium 6061-T6",
            MaterialPreset::Steel4130 => "Steel 4130",
        }
    }

    /// Parse a short name as typed on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "carbon" | "cfrp" | "carbon-fiber" | "carbon-fibre" => Some(MaterialPreset::CarbonFiberTube),
            "aluminum" | "aluminium" | "6061" | "6061-t6" => Some(MaterialPreset::Aluminum6061T6),
            "steel" | "4130" | "chromoly" => Some(MaterialPreset::Steel4130),
            _ => None,
        }
    }
}

/// Material as written in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialSpec {
    Preset { preset: MaterialPreset },
    Custom {
        youngs_modulus_gpa: f64,
        #[serde(default)]
        yield_strength_mpa: Option<f64>,
        density_g_cm3: f64,
    },
}

impl Default for MaterialSpec {
    fn default() -> Self {
        MaterialSpec::Preset {
            preset: MaterialPreset::CarbonFiberTube,
        }
    }
}

impl MaterialSpec {
    /// Resolve to validated SI properties
    pub fn resolve(&self) -> CalcResult<MaterialProperties> {
        match self {
            MaterialSpec::Preset { preset } => Ok(preset.properties()),
            MaterialSpec::Custom {
                youngs_modulus_gpa,
                yield_strength_mpa,
                density_g_cm3,
            } => MaterialProperties::from_display_units(*youngs_modulus_gpa, *yield_strength_mpa, *density_g_cm3),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            MaterialSpec::Preset { preset } => preset.display_name().to_string(),
            MaterialSpec::Custom { youngs_modulus_gpa, .. } => format!("Custom (E = {} GPa)", youngs_modulus_gpa),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in [
            MaterialPreset::CarbonFiberTube,
            MaterialPreset::Aluminum6061T6,
            MaterialPreset::Steel4130,
        ] {
            assert!(preset.properties().validate().is_ok(), "{:?}", preset);
        }
    }

    #[test]
    fn test_display_unit_conversion() {
        let props = MaterialProperties::from_display_units(140.0, Some(600.0), 1.6).unwrap();
        assert_eq!(props.youngs_modulus_pa, 140.0e9);
        assert_eq!(props.yield_strength_pa, Some(600.0e6));
        assert!((props.density_kg_m3 - 1600.0).abs() < 1e-9);
        assert_eq!(props.youngs_modulus_gpa(), 140.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(MaterialProperties::new(0.0, None, 1000.0).is_err());
        assert!(MaterialProperties::new(70.0e9, Some(-1.0), 1000.0).is_err());
        assert!(MaterialProperties::new(70.0e9, None, -1.0).is_err());
        assert!(MaterialProperties::new(f64::NAN, None, 1000.0).is_err());
    }

    #[test]
    fn test_zero_density_and_yield_allowed() {
        assert!(MaterialProperties::new(70.0e9, Some(0.0), 0.0).is_ok());
    }

    #[test]
    fn test_material_json() {
        let json = r#"{ "type": "Custom", "youngs_modulus_gpa": 70.0, "density_g_cm3": 2.7 }"#;
        let material: MaterialSpec = serde_json::from_str(json).unwrap();
        let props = material.resolve().unwrap();
        assert_eq!(props.youngs_modulus_pa, 70.0e9);
        assert_eq!(props.yield_strength_pa, None);

        let preset: MaterialSpec = serde_json::from_str(r#"{ "type": "Preset", "preset": "Steel4130" }"#).unwrap();
        assert_eq!(preset.resolve().unwrap().density_kg_m3, 7850.0);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(MaterialPreset::from_name("Aluminium"), Some(MaterialPreset::Aluminum6061T6));
        assert_eq!(MaterialPreset::from_name("cfrp"), Some(MaterialPreset::CarbonFiberTube));
        assert_eq!(MaterialPreset::from_name("wood"), None);
    }
}
