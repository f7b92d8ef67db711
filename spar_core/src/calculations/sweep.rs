//! # Sweeps
//!
//! Sampled curves for plotting:
//!
//! - [`sweep_over_span`] - bending moment M(x) and elastic curve δ(x) along the
//!   span for a fixed tip load
//! - [`sweep_over_load`] - root stress and tip deflection of each spar as the
//!   tip load ramps from zero to a maximum
//!
//! Sample positions follow `linspace` semantics: `n` evenly spaced values
//! including both ends, `n = 0` gives no samples and `n = 1` gives only the
//! start value.
//!
//! Series are in SI units (N, m, Pa). Conversion to display units happens in
//! the CLI and in [`crate::export`].

use serde::{Deserialize, Serialize};

use crate::equations::beam::{bending_stress, cantilever_point_deflection, cantilever_point_moment, cantilever_tip_deflection};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::TubeGeometry;

use super::spar::BendingSection;

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last sample is exactly `end` for `n ≥ 2`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { end } else { start + step * k as f64 })
                .collect()
        }
    }
}

/// An ordered (x, y) series with axis labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    x_label: String,
    y_label: String,
    points: Vec<(f64, f64)>,
}

impl SweepSeries {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        SweepSeries {
            x_label: x_label.into(),
            y_label: y_label.into(),
            points,
        }
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }

    /// Point with the largest |y|
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .fold(None, |best: Option<(f64, f64)>, p| match best {
                Some(b) if b.1.abs() >= p.1.abs() => Some(b),
                _ => Some(p),
            })
    }
}

/// Moment and deflection along the span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanProfile {
    /// x (m) against M(x) (N·m)
    pub moment: SweepSeries,
    /// x (m) against δ(x) (m)
    pub deflection: SweepSeries,
}

/// Sample M(x) = F(L − x) and δ(x) = Fx²(3L − x)/(6EI) at `sample_count`
/// positions from the root (x = 0) to the tip (x = L).
pub fn sweep_over_span(
    span_m: f64,
    tip_force_n: f64,
    youngs_modulus_pa: f64,
    moment_of_inertia_m4: f64,
    sample_count: usize,
) -> CalcResult<SpanProfile> {
    check_positive("span_m", span_m)?;
    check_finite("tip_force_n", tip_force_n)?;
    check_positive("youngs_modulus_pa", youngs_modulus_pa)?;
    check_positive("moment_of_inertia_m4", moment_of_inertia_m4)?;

    let xs = linspace(0.0, span_m, sample_count);
    let moment = xs
        .iter()
        .map(|&x| (x, cantilever_point_moment(tip_force_n, span_m, x)))
        .collect();
    let deflection = xs
        .iter()
        .map(|&x| {
            (
                x,
                cantilever_point_deflection(tip_force_n, span_m, x, youngs_modulus_pa, moment_of_inertia_m4),
            )
        })
        .collect();

    tracing::trace!(samples = sample_count, "span sweep");

    Ok(SpanProfile {
        moment: SweepSeries::new("Position (m)", "Bending moment (N·m)", moment),
        deflection: SweepSeries::new("Position (m)", "Deflection (m)", deflection),
    })
}

/// One spar's section as seen by the load sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSection {
    pub label: String,
    pub section: BendingSection,
}

impl SweepSection {
    pub fn new(label: impl Into<String>, section: BendingSection) -> Self {
        SweepSection {
            label: label.into(),
            section,
        }
    }

    /// Section of a tube analysed on its own
    pub fn of_tube(label: impl Into<String>, tube: &TubeGeometry) -> Self {
        Self::new(label, BendingSection::of_tube(tube))
    }
}

/// Stress and deflection curves of one spar over the load ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparLoadSeries {
    pub label: String,
    /// Load (N) against root bending stress (Pa)
    pub stress: SweepSeries,
    /// Load (N) against tip deflection (m)
    pub deflection: SweepSeries,
}

/// Result of [`sweep_over_load`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSweep {
    /// Load samples (N), shared by every series
    pub loads: Vec<f64>,
    pub spars: Vec<SparLoadSeries>,
}

impl LoadSweep {
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

/// Ramp the tip load over `sample_count` values in [0, `max_force_n`] and
/// evaluate root stress and tip deflection for every section.
pub fn sweep_over_load(
    max_force_n: f64,
    span_m: f64,
    sections: &[SweepSection],
    youngs_modulus_pa: f64,
    sample_count: usize,
) -> CalcResult<LoadSweep> {
    check_finite("max_force_n", max_force_n)?;
    check_positive("span_m", span_m)?;
    check_positive("youngs_modulus_pa", youngs_modulus_pa)?;
    for s in sections {
        check_positive("moment_of_inertia_m4", s.section.moment_of_inertia_m4)?;
        check_finite("extreme_fiber_m", s.section.extreme_fiber_m)?;
    }

    let loads = linspace(0.0, max_force_n, sample_count);

    let spars = sections
        .iter()
        .map(|s| {
            let i = s.section.moment_of_inertia_m4;
            let c = s.section.extreme_fiber_m;
            let stress = loads.iter().map(|&f| (f, bending_stress(f, span_m, i, c))).collect();
            let deflection = loads
                .iter()
                .map(|&f| (f, cantilever_tip_deflection(f, span_m, youngs_modulus_pa, i)))
                .collect();
            SparLoadSeries {
                label: s.label.clone(),
                stress: SweepSeries::new("Load (N)", "Bending stress (Pa)", stress),
                deflection: SweepSeries::new("Load (N)", "Tip deflection (m)", deflection),
            }
        })
        .collect();

    tracing::trace!(samples = sample_count, spars = sections.len(), "load sweep");

    Ok(LoadSweep { loads, spars })
}

fn check_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite number"))
    }
}

fn check_positive(field: &str, value: f64) -> CalcResult<()> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const E: f64 = 70.0e9;

    fn front() -> TubeGeometry {
        TubeGeometry::from_mm(20.0, 18.0).unwrap()
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(*linspace(0.0, 1.3, 200).last().unwrap(), 1.3);
    }

    #[test]
    fn test_span_profile_endpoints() {
        let i = front().moment_of_inertia_m4();
        let profile = sweep_over_span(1.3, 60.0, E, i, 200).unwrap();

        assert_eq!(profile.moment.len(), 200);
        assert_eq!(profile.deflection.len(), 200);

        let (x0, m0) = profile.moment.points()[0];
        assert_eq!(x0, 0.0);
        assert_relative_eq!(m0, 78.0);

        let (xl, ml) = *profile.moment.points().last().unwrap();
        assert_eq!(xl, 1.3);
        assert_relative_eq!(ml, 0.0, epsilon = 1e-12);

        assert_eq!(profile.deflection.points()[0].1, 0.0);
        let tip = profile.deflection.points().last().unwrap().1;
        assert_relative_eq!(tip, cantilever_tip_deflection(60.0, 1.3, E, i), max_relative = 1e-12);
        assert_eq!(profile.deflection.peak().map(|p| p.1), Some(tip));
    }

    #[test]
    fn test_span_sample_counts() {
        let i = front().moment_of_inertia_m4();
        assert!(sweep_over_span(1.0, 10.0, E, i, 0).unwrap().moment.is_empty());

        let single = sweep_over_span(1.0, 10.0, E, i, 1).unwrap();
        assert_eq!(single.moment.points(), &[(0.0, 10.0)]);
        assert_eq!(single.deflection.points(), &[(0.0, 0.0)]);
    }

    #[test]
    fn test_span_rejects_bad_parameters() {
        let i = front().moment_of_inertia_m4();
        assert!(sweep_over_span(0.0, 10.0, E, i, 10).is_err());
        assert!(sweep_over_span(1.0, 10.0, 0.0, i, 10).is_err());
        assert!(sweep_over_span(1.0, 10.0, E, 0.0, 10).is_err());
        assert!(sweep_over_span(1.0, f64::NAN, E, i, 10).is_err());
    }

    #[test]
    fn test_load_sweep_is_linear_in_load() {
        let sections = vec![
            SweepSection::of_tube("Front", &front()),
            SweepSection::of_tube("Rear", &TubeGeometry::from_mm(10.0, 8.0).unwrap()),
        ];
        let sweep = sweep_over_load(100.0, 1.0, &sections, E, 11).unwrap();

        assert_eq!(sweep.len(), 11);
        assert_eq!(sweep.loads[0], 0.0);
        assert_eq!(sweep.loads[10], 100.0);
        assert_eq!(sweep.spars.len(), 2);
        assert_eq!(sweep.spars[1].label, "Rear");

        let front_series = &sweep.spars[0];
        assert_eq!(front_series.stress.points()[0].1, 0.0);
        let half = front_series.stress.points()[5].1;
        let full = front_series.stress.points()[10].1;
        assert_relative_eq!(full, 2.0 * half, max_relative = 1e-12);

        // The smaller tube is the more flexible one
        let front_tip = front_series.deflection.points()[10].1;
        let rear_tip = sweep.spars[1].deflection.points()[10].1;
        assert!(rear_tip > front_tip);
        assert_relative_eq!(front_tip, 0.176303, max_relative = 1e-5);
    }

    #[test]
    fn test_load_sweep_without_spars() {
        let sweep = sweep_over_load(50.0, 1.0, &[], E, 5).unwrap();
        assert_eq!(sweep.loads.len(), 5);
        assert!(sweep.spars.is_empty());
    }
}
