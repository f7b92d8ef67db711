//! # Analysis Configuration
//!
//! All inputs of a spar analysis in one serde struct, loadable from JSON.
//! Every field has a default, so a file only needs to name what differs from
//! the stock setup: a 1.3 m half-span carrying half of 120 N total lift on a
//! 20/18 mm front spar and a 10/8 mm rear spar of carbon fibre tube.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "span_m": 1.3,
//!   "load": { "type": "TotalLift", "total_lift_n": 120.0 },
//!   "material": { "type": "Preset", "preset": "CarbonFiberTube" },
//!   "spars": [
//!     { "label": "Front", "outer_diameter_mm": 20.0, "inner_diameter_mm": 18.0 },
//!     { "label": "Rear", "outer_diameter_mm": 10.0, "inner_diameter_mm": 8.0 }
//!   ],
//!   "inertia_mode": "Independent",
//!   "span_samples": 200,
//!   "load_samples": 21,
//!   "load_sweep_max_n": null
//! }
//! ```
//!
//! Unknown fields are rejected so that typos do not silently fall back to
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::analysis::InertiaMode;
use crate::calculations::spar::SparInput;
use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadCase;
use crate::materials::MaterialSpec;

/// Most spars a configuration may describe
pub const MAX_SPARS: usize = 2;

/// Upper bound on sweep sample counts
pub const MAX_SAMPLES: usize = 1_000_000;

/// How the tip load is given
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadSpec {
    /// Force applied directly at the spar tip (N)
    TipForce { force_n: f64 },
    /// Total aircraft lift (N); each half-wing spar takes half
    TotalLift { total_lift_n: f64 },
}

impl Default for LoadSpec {
    fn default() -> Self {
        LoadSpec::TotalLift { total_lift_n: 120.0 }
    }
}

/// Complete input for [`crate::calculations::analysis::analyze`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Cantilever span, root to tip (m)
    pub span_m: f64,
    pub load: LoadSpec,
    pub material: MaterialSpec,
    /// One or two spar tubes
    pub spars: Vec<SparInput>,
    pub inertia_mode: InertiaMode,
    /// Positions sampled along the span
    pub span_samples: usize,
    /// Loads sampled in the load sweep
    pub load_samples: usize,
    /// Top of the load sweep (N); the design tip force when absent
    pub load_sweep_max_n: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            span_m: 1.3,
            load: LoadSpec::default(),
            material: MaterialSpec::default(),
            spars: vec![
                SparInput::new("Front", 20.0, 18.0),
                SparInput::new("Rear", 10.0, 8.0),
            ],
            inertia_mode: InertiaMode::default(),
            span_samples: 200,
            load_samples: 21,
            load_sweep_max_n: None,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: AnalysisConfig =
            serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Tip load case implied by `span_m` and `load`
    pub fn load_case(&self) -> CalcResult<LoadCase> {
        match self.load {
            LoadSpec::TipForce { force_n } => LoadCase::new(force_n, self.span_m),
            LoadSpec::TotalLift { total_lift_n } => LoadCase::half_wing(total_lift_n, self.span_m),
        }
    }

    /// Upper end of the load sweep for a given design load
    pub fn load_sweep_max_force(&self, load: &LoadCase) -> f64 {
        self.load_sweep_max_n.unwrap_or(load.tip_force_n)
    }

    /// Check every field; geometry is checked spar by spar.
    pub fn validate(&self) -> CalcResult<()> {
        self.load_case()?;
        self.material.resolve()?;

        if self.spars.is_empty() || self.spars.len() > MAX_SPARS {
            return Err(CalcError::invalid_input(
                "spars",
                self.spars.len().to_string(),
                format!("Between 1 and {} spars are supported", MAX_SPARS),
            ));
        }

        for (idx, spar) in self.spars.iter().enumerate() {
            if spar.label.trim().is_empty() {
                return Err(CalcError::invalid_input(
                    format!("spars[{}].label", idx),
                    "",
                    "Spar label cannot be empty",
                ));
            }
            if self.spars[..idx].iter().any(|other| other.label == spar.label) {
                return Err(CalcError::invalid_input(
                    format!("spars[{}].label", idx),
                    spar.label.clone(),
                    "Spar labels must be unique",
                ));
            }
            spar.geometry()?;
        }

        for (field, count) in [("span_samples", self.span_samples), ("load_samples", self.load_samples)] {
            if count > MAX_SAMPLES {
                return Err(CalcError::invalid_input(
                    field,
                    count.to_string(),
                    format!("At most {} samples are supported", MAX_SAMPLES),
                ));
            }
        }

        if let Some(max) = self.load_sweep_max_n {
            if !max.is_finite() {
                return Err(CalcError::invalid_input(
                    "load_sweep_max_n",
                    max.to_string(),
                    "Load sweep maximum must be a finite number",
                ));
            }
        }

        Ok(())
    }
}

/// Read and validate a configuration file
pub fn load_config(path: &Path) -> CalcResult<AnalysisConfig> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    let config = AnalysisConfig::from_json(&json)?;
    tracing::debug!(path = %path.display(), spars = config.spars.len(), "loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialPreset;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        let load = config.load_case().unwrap();
        assert_eq!(load.tip_force_n, 60.0);
        assert_eq!(load.span_m, 1.3);
        assert_eq!(config.load_sweep_max_force(&load), 60.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AnalysisConfig::from_json(r#"{ "span_m": 0.8, "inertia_mode": "Combined" }"#).unwrap();
        assert_eq!(config.span_m, 0.8);
        assert_eq!(config.inertia_mode, InertiaMode::Combined);
        assert_eq!(config.spars.len(), 2);
        assert_eq!(config.span_samples, 200);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = AnalysisConfig::from_json(r#"{ "spam_m": 0.8 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_json_round_trip() {
        let config = AnalysisConfig {
            load: LoadSpec::TipForce { force_n: 45.0 },
            material: MaterialSpec::Preset {
                preset: MaterialPreset::Aluminum6061T6,
            },
            load_sweep_max_n: Some(90.0),
            ..AnalysisConfig::default()
        };
        let back = AnalysisConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_spar_count_limits() {
        let none = AnalysisConfig {
            spars: vec![],
            ..AnalysisConfig::default()
        };
        assert!(none.validate().is_err());

        let three = AnalysisConfig {
            spars: vec![
                SparInput::new("A", 10.0, 8.0),
                SparInput::new("B", 10.0, 8.0),
                SparInput::new("C", 10.0, 8.0),
            ],
            ..AnalysisConfig::default()
        };
        assert!(three.validate().is_err());
    }

    #[test]
    fn test_duplicate_and_empty_labels() {
        let dup = AnalysisConfig {
            spars: vec![SparInput::new("A", 10.0, 8.0), SparInput::new("A", 12.0, 10.0)],
            ..AnalysisConfig::default()
        };
        assert!(dup.validate().is_err());

        let empty = AnalysisConfig {
            spars: vec![SparInput::new("  ", 10.0, 8.0)],
            ..AnalysisConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_invalid_span_and_geometry() {
        assert!(AnalysisConfig::from_json(r#"{ "span_m": 0.0 }"#).is_err());
        let err = AnalysisConfig::from_json(
            r#"{ "spars": [ { "label": "Main", "outer_diameter_mm": 10.0, "inner_diameter_mm": 10.0 } ] }"#,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/spar.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
