//! # Load Sweep CSV Export
//!
//! Writes a [`LoadSweep`] as a plain CSV table for spreadsheets and plotting
//! tools, and reads such a table back.
//!
//! ## Format
//!
//! ```text
//! Load (N),Front Stress (MPa),Rear Stress (MPa),Front Deflection (mm),Rear Deflection (mm)
//! 0,0,0,0,0
//! 6,28.87,...
//! ```
//!
//! - First column is the load in newtons
//! - Then one `<label> Stress (MPa)` column per spar, in spar order
//! - Then one `<label> Deflection (mm)` column per spar, in the same order
//! - Comma separated, `\n` line endings, UTF-8, no quoting
//!
//! Because fields are never quoted and header cells are trimmed on parse,
//! spar labels containing a comma, a double quote or a line break are rejected
//! on export, as are empty labels and labels with surrounding whitespace.
//!
//! ## Atomic Writes
//!
//! [`save_load_sweep_csv`] writes to a temporary file, syncs it and renames it
//! over the target, so a crash never leaves a half-written table behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::sweep::LoadSweep;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Megapascals, Meters, Millimeters, Pascals};

pub const LOAD_HEADER: &str = "Load (N)";
const STRESS_SUFFIX: &str = " Stress (MPa)";
const DEFLECTION_SUFFIX: &str = " Deflection (mm)";

/// One CSV row in display units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSweepRow {
    pub load_n: f64,
    /// One value per spar, in spar order
    pub stress_mpa: Vec<f64>,
    /// One value per spar, in spar order
    pub deflection_mm: Vec<f64>,
}

/// Load sweep in display units, as stored in CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSweepTable {
    pub spar_labels: Vec<String>,
    pub rows: Vec<LoadSweepRow>,
}

impl LoadSweepTable {
    /// Convert a sweep to display units (MPa, mm)
    pub fn from_sweep(sweep: &LoadSweep) -> CalcResult<Self> {
        for series in &sweep.spars {
            if series.stress.len() != sweep.loads.len() || series.deflection.len() != sweep.loads.len() {
                return Err(CalcError::invalid_input(
                    "load_sweep",
                    series.label.clone(),
                    "Series length does not match the number of loads",
                ));
            }
        }

        let rows = sweep
            .loads
            .iter()
            .enumerate()
            .map(|(k, &load_n)| LoadSweepRow {
                load_n,
                stress_mpa: sweep
                    .spars
                    .iter()
                    .map(|s| Megapascals::from(Pascals(s.stress.points()[k].1)).value())
                    .collect(),
                deflection_mm: sweep
                    .spars
                    .iter()
                    .map(|s| Millimeters::from(Meters(s.deflection.points()[k].1)).value())
                    .collect(),
            })
            .collect();

        Ok(LoadSweepTable {
            spar_labels: sweep.spars.iter().map(|s| s.label.clone()).collect(),
            rows,
        })
    }

    /// Column names in file order
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(LOAD_HEADER.to_string())
            .chain(self.spar_labels.iter().map(|l| format!("{}{}", l, STRESS_SUFFIX)))
            .chain(self.spar_labels.iter().map(|l| format!("{}{}", l, DEFLECTION_SUFFIX)))
            .collect()
    }

    /// Render as CSV text
    pub fn to_csv(&self) -> CalcResult<String> {
        for label in &self.spar_labels {
            if label.contains([',', '"', '\n', '\r']) {
                return Err(CalcError::invalid_input(
                    "label",
                    label.clone(),
                    "Labels exported to CSV cannot contain commas, quotes or line breaks",
                ));
            }
            // Header cells are trimmed on parse
            if label.trim().is_empty() || label.trim() != label {
                return Err(CalcError::invalid_input(
                    "label",
                    label.clone(),
                    "Labels exported to CSV must be non-empty without surrounding whitespace",
                ));
            }
        }

        let mut out = String::new();
        out.push_str(&self.headers().join(","));
        out.push('\n');

        for row in &self.rows {
            if row.stress_mpa.len() != self.spar_labels.len() || row.deflection_mm.len() != self.spar_labels.len() {
                return Err(CalcError::invalid_input(
                    "rows",
                    row.load_n.to_string(),
                    "Row has a different number of spars than the header",
                ));
            }
            let cells: Vec<String> = std::iter::once(&row.load_n)
                .chain(&row.stress_mpa)
                .chain(&row.deflection_mm)
                .map(f64::to_string)
                .collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }

        Ok(out)
    }
}

/// Render a load sweep as CSV
pub fn load_sweep_to_csv(sweep: &LoadSweep) -> CalcResult<String> {
    LoadSweepTable::from_sweep(sweep)?.to_csv()
}

/// Parse CSV written by [`load_sweep_to_csv`].
///
/// Line numbers in errors are 1-based; line 1 is the header.
pub fn parse_load_sweep_csv(text: &str) -> CalcResult<LoadSweepTable> {
    let mut lines = text.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line,
        None => return Err(CalcError::csv_format(1, "Missing header row")),
    };
    let spar_labels = parse_header(header)?;
    let width = 1 + 2 * spar_labels.len();

    let mut rows = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let values = line
            .split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| CalcError::csv_format(line_no, format!("'{}' is not a number", field.trim())))
            })
            .collect::<CalcResult<Vec<f64>>>()?;

        if values.len() != width {
            return Err(CalcError::csv_format(
                line_no,
                format!("Expected {} columns, found {}", width, values.len()),
            ));
        }

        let n = spar_labels.len();
        rows.push(LoadSweepRow {
            load_n: values[0],
            stress_mpa: values[1..1 + n].to_vec(),
            deflection_mm: values[1 + n..].to_vec(),
        });
    }

    Ok(LoadSweepTable { spar_labels, rows })
}

fn parse_header(header: &str) -> CalcResult<Vec<String>> {
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    if columns.first() != Some(&LOAD_HEADER) {
        return Err(CalcError::csv_format(1, format!("First column must be '{}'", LOAD_HEADER)));
    }
    let rest = &columns[1..];
    if rest.len() % 2 != 0 {
        return Err(CalcError::csv_format(1, "Stress and deflection columns must come in pairs"));
    }

    let (stress, deflection) = rest.split_at(rest.len() / 2);
    let mut labels = Vec::with_capacity(stress.len());
    for (s, d) in stress.iter().zip(deflection) {
        let label = s
            .strip_suffix(STRESS_SUFFIX)
            .ok_or_else(|| CalcError::csv_format(1, format!("Expected a stress column, found '{}'", s)))?;
        let other = d
            .strip_suffix(DEFLECTION_SUFFIX)
            .ok_or_else(|| CalcError::csv_format(1, format!("Expected a deflection column, found '{}'", d)))?;
        if label != other {
            return Err(CalcError::csv_format(
                1,
                format!("Stress column '{}' and deflection column '{}' name different spars", label, other),
            ));
        }
        labels.push(label.to_string());
    }

    Ok(labels)
}

/// Write a load sweep to `path` atomically.
pub fn save_load_sweep_csv(sweep: &LoadSweep, path: &Path) -> CalcResult<()> {
    let csv = load_sweep_to_csv(sweep)?;

    let tmp_path = path.with_extension("csv.tmp");

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(csv.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), rows = sweep.len(), "saved load sweep");
    Ok(())
}

/// Read a CSV file written by [`save_load_sweep_csv`]
pub fn load_load_sweep_csv(path: &Path) -> CalcResult<LoadSweepTable> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    parse_load_sweep_csv(&text)
}
