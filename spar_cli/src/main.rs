//! # Spar CLI
//!
//! Command-line front end for `spar_core`: runs an analysis from defaults, a
//! JSON configuration file and/or flags, prints key metrics and sweep
//! summaries, and optionally writes the load sweep as CSV.
//!
//! ```bash
//! spar_cli                                  # stock two-spar wing
//! spar_cli --config wing.json --csv sweep.csv
//! spar_cli --span 1.0 --force 100 --material aluminium --json
//! spar_cli --equations
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `spar_cli=info,spar_core=warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spar_core::calculations::{AnalysisResult, InertiaMode, SweepSeries};
use spar_core::config::{load_config, AnalysisConfig, LoadSpec};
use spar_core::equations::{Equation, EquationCategory};
use spar_core::export::save_load_sweep_csv;
use spar_core::materials::{MaterialPreset, MaterialSpec};
use spar_core::{analyze, CalcError, CalcResult};

const USAGE: &str = "\
Usage: spar_cli [OPTIONS]

Options:
  --config FILE        Read an analysis configuration (JSON)
  --span M             Half-span / cantilever length in metres
  --force N            Tip force on the spar in newtons
  --total-lift N       Total aircraft lift in newtons (each spar takes half)
  --material NAME      carbon | aluminium | steel
  --mode MODE          independent | combined
  --csv FILE           Write the load sweep as CSV
  --json               Print the result as JSON only
  --equations          List the formulas used and exit
  -h, --help           Show this help";

/// Rows shown in the sweep summary tables
const SUMMARY_ROWS: usize = 11;

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    span_m: Option<f64>,
    tip_force_n: Option<f64>,
    total_lift_n: Option<f64>,
    material: Option<MaterialPreset>,
    mode: Option<InertiaMode>,
    csv: Option<PathBuf>,
    json: bool,
    equations: bool,
    help: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    config: &'a AnalysisConfig,
    result: &'a AnalysisResult,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spar_cli=info,spar_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    if args.equations {
        print_equations();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "analysis failed");
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> CalcResult<()> {
    let config = build_config(args)?;
    let result = analyze(&config)?;

    if args.json {
        let report = JsonReport {
            generated_at: Utc::now(),
            config: &config,
            result: &result,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", json);
    } else {
        print_report(&config, &result);
    }

    if let Some(path) = &args.csv {
        save_load_sweep_csv(&result.load_sweep, path)?;
        if !args.json {
            println!();
            println!("Load sweep written to {}", path.display());
        }
    }

    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut argv: I) -> CalcResult<CliArgs> {
    let mut args = CliArgs::default();

    while let Some(flag) = argv.next() {
        match flag.as_str() {
            "-h" | "--help" => args.help = true,
            "--json" => args.json = true,
            "--equations" => args.equations = true,
            "--config" => args.config = Some(PathBuf::from(value_for(&flag, &mut argv)?)),
            "--csv" => args.csv = Some(PathBuf::from(value_for(&flag, &mut argv)?)),
            "--span" => args.span_m = Some(number_for(&flag, &mut argv)?),
            "--force" => args.tip_force_n = Some(number_for(&flag, &mut argv)?),
            "--total-lift" => args.total_lift_n = Some(number_for(&flag, &mut argv)?),
            "--material" => {
                let name = value_for(&flag, &mut argv)?;
                args.material = Some(
                    MaterialPreset::from_name(&name)
                        .ok_or_else(|| CalcError::invalid_input("--material", name, "Unknown material"))?,
                );
            }
            "--mode" => {
                let name = value_for(&flag, &mut argv)?;
                args.mode = Some(
                    InertiaMode::from_name(&name)
                        .ok_or_else(|| CalcError::invalid_input("--mode", name, "Expected independent or combined"))?,
                );
            }
            other => return Err(CalcError::invalid_input("argument", other, "Unknown option")),
        }
    }

    if args.tip_force_n.is_some() && args.total_lift_n.is_some() {
        return Err(CalcError::invalid_input(
            "--force",
            "",
            "Give either --force or --total-lift, not both",
        ));
    }

    Ok(args)
}

fn value_for<I: Iterator<Item = String>>(flag: &str, argv: &mut I) -> CalcResult<String> {
    argv.next()
        .ok_or_else(|| CalcError::invalid_input(flag, "", "Missing value"))
}

fn number_for<I: Iterator<Item = String>>(flag: &str, argv: &mut I) -> CalcResult<f64> {
    let raw = value_for(flag, argv)?;
    raw.parse()
        .map_err(|_| CalcError::invalid_input(flag, raw.clone(), "Expected a number"))
}

/// Defaults, then the config file, then flags
fn build_config(args: &CliArgs) -> CalcResult<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(span) = args.span_m {
        config.span_m = span;
    }
    if let Some(force_n) = args.tip_force_n {
        config.load = LoadSpec::TipForce { force_n };
    }
    if let Some(total_lift_n) = args.total_lift_n {
        config.load = LoadSpec::TotalLift { total_lift_n };
    }
    if let Some(preset) = args.material {
        config.material = MaterialSpec::Preset { preset };
    }
    if let Some(mode) = args.mode {
        config.inertia_mode = mode;
    }

    config.validate()?;
    Ok(config)
}

fn print_report(config: &AnalysisConfig, result: &AnalysisResult) {
    println!("═══════════════════════════════════════");
    println!("  SPAR ANALYSIS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:      {:.3} m", result.span_m);
    match config.load {
        LoadSpec::TotalLift { total_lift_n } => {
            println!("  Load:      {:.1} N tip ({:.1} N total lift / 2)", result.tip_force_n, total_lift_n)
        }
        LoadSpec::TipForce { .. } => println!("  Load:      {:.1} N tip", result.tip_force_n),
    }
    println!(
        "  Material:  {} (E = {:.1} GPa, ρ = {:.2} g/cm³)",
        config.material.display_name(),
        result.material.youngs_modulus_gpa(),
        result.material.density_g_cm3()
    );
    println!("  Mode:      {}", result.inertia_mode.display_name());
    println!();

    for spar in &result.spars {
        println!("{} spar ({:.1}/{:.1} mm):", spar.label, spar.outer_diameter_mm, spar.inner_diameter_mm);
        println!("  I     = {:.1} mm⁴", spar.moment_of_inertia_mm4);
        println!("  M_max = {:.2} N·m", spar.max_moment_nm);
        println!("  σ_max = {:.2} MPa", spar.max_bending_stress_mpa());
        println!("  δ_tip = {:.2} mm", spar.tip_deflection_mm());
        println!("  τ_avg = {:.3} MPa", spar.shear_stress_mpa());
        println!("  mass  = {:.1} g", spar.mass_g());
        match spar.safety_factor {
            Some(n) => println!("  SF    = {} {}", format_ratio(n), status_icon(n >= 1.0)),
            None => println!("  SF    = n/a (no yield strength)"),
        }
        println!();
    }

    println!("Combined I = {:.1} mm⁴", result.combined_moment_of_inertia_mm4);
    println!("Total mass = {:.1} g", result.total_mass_kg * 1000.0);
    if let Some(governing) = result.governing_spar() {
        println!("Governing  = {} spar", governing.label);
    }

    for labeled in &result.span_profiles {
        println!();
        println!("Span profile - {}:", labeled.label);
        println!("  {:>9}  {:>12}  {:>12}", "x (m)", "M (N·m)", "δ (mm)");
        let moments = summary_points(&labeled.profile.moment);
        let deflections = summary_points(&labeled.profile.deflection);
        for ((x, m), (_, d)) in moments.into_iter().zip(deflections) {
            println!("  {:>9.3}  {:>12.3}  {:>12.3}", x, m, d * 1000.0);
        }
    }

    let sweep = &result.load_sweep;
    if !sweep.is_empty() {
        println!();
        println!("Load sweep:");
        let mut header = format!("  {:>9}", "F (N)");
        for s in &sweep.spars {
            header.push_str(&format!("  {:>14}  {:>14}", format!("{} σ (MPa)", s.label), format!("{} δ (mm)", s.label)));
        }
        println!("{}", header);
        for k in summary_indices(sweep.len()) {
            let mut line = format!("  {:>9.2}", sweep.loads[k]);
            for s in &sweep.spars {
                let stress = s.stress.points()[k].1 / 1.0e6;
                let deflection = s.deflection.points()[k].1 * 1000.0;
                line.push_str(&format!("  {:>14.2}  {:>14.2}", stress, deflection));
            }
            println!("{}", line);
        }
    }

    println!();
    println!("═══════════════════════════════════════");
}

/// Evenly spread indices, always including the first and last
fn summary_indices(len: usize) -> Vec<usize> {
    if len <= SUMMARY_ROWS {
        return (0..len).collect();
    }
    let mut indices: Vec<usize> = (0..SUMMARY_ROWS)
        .map(|k| k * (len - 1) / (SUMMARY_ROWS - 1))
        .collect();
    indices.dedup();
    indices
}

fn summary_points(series: &SweepSeries) -> Vec<(f64, f64)> {
    summary_indices(series.len())
        .into_iter()
        .map(|k| series.points()[k])
        .collect()
}

fn print_equations() {
    for category in EquationCategory::all() {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }
        println!("{}:", category.display_name());
        for equation in equations {
            let meta = equation.metadata();
            println!("  {:<32} {}", meta.name, meta.formula_plain);
        }
        println!();
    }
}

fn format_ratio(n: f64) -> String {
    if n.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}", n)
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
