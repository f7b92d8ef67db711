//! # Wing Spar Analysis
//!
//! Runs a complete [`AnalysisConfig`]: evaluates every spar, the combined
//! inertia, the span profile and the load sweep in one pass.
//!
//! ## Inertia Modes
//!
//! - [`InertiaMode::Independent`] - each spar carries the full tip load on its
//!   own. Conservative, and the right check when sizing a single tube.
//! - [`InertiaMode::Combined`] - the spars are tied together by ribs and bend
//!   as one section with `I = I₁ + I₂`. Each spar's stress uses the shared
//!   inertia with its own fibre distance; the front spar's values match a
//!   single combined-section hand calculation with `c = OD₁/2`.
//!
//! ## Example
//!
//! ```rust
//! use spar_core::calculations::analysis::analyze;
//! use spar_core::config::AnalysisConfig;
//!
//! let result = analyze(&AnalysisConfig::default()).unwrap();
//! assert_eq!(result.spars.len(), 2);
//! assert_eq!(result.tip_force_n, 60.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::equations::section::combined_moment_of_inertia;
use crate::errors::CalcResult;
use crate::geometry::TubeGeometry;
use crate::materials::MaterialProperties;
use crate::units::{Mm4, M4};

use super::spar::{calculate_spar_with_section, BendingSection, SparResult};
use super::sweep::{sweep_over_load, sweep_over_span, LoadSweep, SpanProfile, SweepSection};

/// How the spars share bending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InertiaMode {
    /// Each spar takes the whole load alone
    #[default]
    Independent,
    /// Spars bend together with the summed inertia
    Combined,
}

impl InertiaMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            InertiaMode::Independent => "independent spars",
            InertiaMode::Combined => "combined section",
        }
    }

    /// Parse `independent` / `combined` as typed on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "independent" => Some(InertiaMode::Independent),
            "combined" => Some(InertiaMode::Combined),
            _ => None,
        }
    }
}

/// Span profile tagged with what it describes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSpanProfile {
    /// Spar label, or "Combined" for the shared section
    pub label: String,
    pub profile: SpanProfile,
}

/// Everything computed for one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub span_m: f64,
    /// Tip load actually applied to the spar(s) (N)
    pub tip_force_n: f64,
    pub material: MaterialProperties,
    pub inertia_mode: InertiaMode,
    pub spars: Vec<SparResult>,
    /// I₁ + I₂ (m⁴)
    pub combined_moment_of_inertia_m4: f64,
    /// I₁ + I₂ (mm⁴)
    pub combined_moment_of_inertia_mm4: f64,
    pub total_mass_kg: f64,
    /// One profile per spar, or a single shared one in combined mode
    pub span_profiles: Vec<LabeledSpanProfile>,
    pub load_sweep: LoadSweep,
}

impl AnalysisResult {
    /// Spar with the lowest safety factor, if any has one
    pub fn governing_spar(&self) -> Option<&SparResult> {
        self.spars
            .iter()
            .filter(|s| s.safety_factor.is_some())
            .min_by(|a, b| {
                let na = a.safety_factor.unwrap_or(f64::INFINITY);
                let nb = b.safety_factor.unwrap_or(f64::INFINITY);
                na.total_cmp(&nb)
            })
    }
}

/// Run the full analysis described by `config`
pub fn analyze(config: &AnalysisConfig) -> CalcResult<AnalysisResult> {
    config.validate()?;

    let material = config.material.resolve()?;
    let load = config.load_case()?;

    let _span = tracing::debug_span!("analyze", mode = ?config.inertia_mode, spars = config.spars.len()).entered();

    let tubes = config
        .spars
        .iter()
        .map(|s| Ok((s.label.as_str(), s.geometry()?)))
        .collect::<CalcResult<Vec<(&str, TubeGeometry)>>>()?;

    let combined_i = tubes
        .iter()
        .map(|(_, t)| t.moment_of_inertia_m4())
        .fold(0.0, combined_moment_of_inertia);

    let sections: Vec<SweepSection> = tubes
        .iter()
        .map(|(label, tube)| {
            let section = match config.inertia_mode {
                InertiaMode::Independent => BendingSection::of_tube(tube),
                InertiaMode::Combined => BendingSection {
                    moment_of_inertia_m4: combined_i,
                    extreme_fiber_m: tube.extreme_fiber_m(),
                },
            };
            SweepSection::new(*label, section)
        })
        .collect();

    let spars = tubes
        .iter()
        .zip(&sections)
        .map(|((label, tube), s)| calculate_spar_with_section(label, tube, &s.section, &material, &load))
        .collect::<CalcResult<Vec<SparResult>>>()?;

    let span_profiles = match config.inertia_mode {
        InertiaMode::Independent => sections
            .iter()
            .map(|s| {
                Ok(LabeledSpanProfile {
                    label: s.label.clone(),
                    profile: sweep_over_span(
                        load.span_m,
                        load.tip_force_n,
                        material.youngs_modulus_pa,
                        s.section.moment_of_inertia_m4,
                        config.span_samples,
                    )?,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?,
        InertiaMode::Combined => vec![LabeledSpanProfile {
            label: "Combined".to_string(),
            profile: sweep_over_span(
                load.span_m,
                load.tip_force_n,
                material.youngs_modulus_pa,
                combined_i,
                config.span_samples,
            )?,
        }],
    };

    let load_sweep = sweep_over_load(
        config.load_sweep_max_force(&load),
        load.span_m,
        &sections,
        material.youngs_modulus_pa,
        config.load_samples,
    )?;

    let total_mass_kg = spars.iter().map(|s| s.mass_kg).sum();

    tracing::info!(
        spars = spars.len(),
        tip_force_n = load.tip_force_n,
        combined_inertia_mm4 = Mm4::from(M4(combined_i)).value(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        span_m: load.span_m,
        tip_force_n: load.tip_force_n,
        material,
        inertia_mode: config.inertia_mode,
        spars,
        combined_moment_of_inertia_m4: combined_i,
        combined_moment_of_inertia_mm4: Mm4::from(M4(combined_i)).value(),
        total_mass_kg,
        span_profiles,
        load_sweep,
    })
}
