//! # Equation Registry
//!
//! Every formula the engine evaluates, with a plain-text rendering, variable
//! definitions, references and assumptions. The registry backs the
//! `gen-equations` binary (Markdown reference) and the CLI's `--equations`
//! listing, so the printed numbers can always be traced back to a formula.
//!
//! ## Usage
//!
//! ```rust
//! use spar_core::equations::registry::Equation;
//!
//! let meta = Equation::TipDeflection.metadata();
//! assert_eq!(meta.formula_plain, "δ_max = P L³ / (3 E I)");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Reference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Gere & Goodno, Mechanics of Materials
    Gere { edition: u8, section: &'static str },
    /// Fundamental mechanics (geometry, definitions)
    Mechanics,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            Reference::Gere { edition, section } => {
                format!("Gere & Goodno {}ed, Section {}", edition, section)
            }
            Reference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Grouping used when rendering the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    SectionProperties,
    InternalForces,
    Stresses,
    Deflections,
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Deflections => "Deflections",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// All categories in rendering order
    pub fn all() -> [EquationCategory; 5] {
        [
            EquationCategory::SectionProperties,
            EquationCategory::InternalForces,
            EquationCategory::Stresses,
            EquationCategory::Deflections,
            EquationCategory::DesignChecks,
        ]
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub formula_plain: &'static str,
    pub reference: Reference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas used by the spar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// A = π(D² − d²)/4
    TubeArea,
    /// I = (π/64)(D⁴ − d⁴)
    TubeMomentOfInertia,
    /// I_total = I₁ + I₂
    CombinedMomentOfInertia,
    /// M(x) = P(L − x)
    CantileverMoment,
    /// σ = P L c / I
    BendingStress,
    /// τ = P / (π(r_o² − r_i²))
    AverageShearStress,
    /// δ_max = P L³ / (3EI)
    TipDeflection,
    /// δ(x) = P x² (3L − x) / (6EI)
    ElasticCurve,
    /// m = π(D² − d²)/4 · L · ρ
    TubeMass,
    /// n = σ_y / σ
    SafetyFactor,
}

/// Every equation, in registry order
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::TubeArea,
    Equation::TubeMomentOfInertia,
    Equation::CombinedMomentOfInertia,
    Equation::CantileverMoment,
    Equation::BendingStress,
    Equation::AverageShearStress,
    Equation::TipDeflection,
    Equation::ElasticCurve,
    Equation::TubeMass,
    Equation::SafetyFactor,
];

const CANTILEVER_ASSUMPTIONS: [&str; 3] = [
    "Linear-elastic material",
    "Small deflections (δ << L)",
    "Prismatic beam, single tip point load",
];

impl Equation {
    /// Full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::TubeArea => EquationMetadata {
                name: "Tube Cross-Sectional Area",
                description: "Area of an annular cross-section",
                formula_plain: "A = π (D² − d²) / 4",
                reference: Reference::Mechanics,
                variables: vec![
                    Variable::new("D", "Outer diameter", "m"),
                    Variable::new("d", "Inner diameter", "m"),
                    Variable::new("A", "Cross-sectional area", "m²"),
                ],
                assumptions: vec![],
                category: EquationCategory::SectionProperties,
                source_function: "equations::section::tube_area",
            },
            Equation::TubeMomentOfInertia => EquationMetadata {
                name: "Tube Second Moment of Area",
                description: "Second moment of area of a hollow circular tube about a diameter",
                formula_plain: "I = (π/64) (D⁴ − d⁴)",
                reference: Reference::Roarks { edition: 8, table: "Table A.1", case: "15" },
                variables: vec![
                    Variable::new("D", "Outer diameter", "m"),
                    Variable::new("d", "Inner diameter", "m"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: vec!["Diameters converted from mm to m once, at input validation"],
                category: EquationCategory::SectionProperties,
                source_function: "equations::section::tube_moment_of_inertia",
            },
            Equation::CombinedMomentOfInertia => EquationMetadata {
                name: "Combined Spar Inertia",
                description: "Sum of spar inertias for spars bending together",
                formula_plain: "I_total = I₁ + I₂",
                reference: Reference::Mechanics,
                variables: vec![
                    Variable::new("I₁", "Front spar inertia", "m⁴"),
                    Variable::new("I₂", "Rear spar inertia", "m⁴"),
                ],
                assumptions: vec!["Both spars share the neutral axis and have equal curvature"],
                category: EquationCategory::SectionProperties,
                source_function: "equations::section::combined_moment_of_inertia",
            },
            Equation::CantileverMoment => EquationMetadata {
                name: "Cantilever Bending Moment",
                description: "Moment at distance x from the fixed end for a tip load",
                formula_plain: "M(x) = P (L − x)",
                reference: Reference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("L", "Span", "m"),
                    Variable::new("x", "Distance from fixed end", "m"),
                ],
                assumptions: CANTILEVER_ASSUMPTIONS.to_vec(),
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::cantilever_point_moment",
            },
            Equation::BendingStress => EquationMetadata {
                name: "Maximum Bending Stress",
                description: "Extreme-fibre stress at the fixed end",
                formula_plain: "σ = P L c / I",
                reference: Reference::Gere { edition: 9, section: "5.5" },
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("L", "Span", "m"),
                    Variable::new("c", "Neutral axis to extreme fibre (D/2)", "m"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: CANTILEVER_ASSUMPTIONS.to_vec(),
                category: EquationCategory::Stresses,
                source_function: "equations::beam::bending_stress",
            },
            Equation::AverageShearStress => EquationMetadata {
                name: "Average Shear Stress",
                description: "Transverse shear averaged over the annulus",
                formula_plain: "τ = P / (π (r_o² − r_i²))",
                reference: Reference::Mechanics,
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("r_o", "Outer radius", "m"),
                    Variable::new("r_i", "Inner radius", "m"),
                ],
                assumptions: vec!["Average over the section; peak shear at the neutral axis is higher"],
                category: EquationCategory::Stresses,
                source_function: "equations::beam::average_shear_stress",
            },
            Equation::TipDeflection => EquationMetadata {
                name: "Cantilever Tip Deflection",
                description: "Free-end deflection for a tip load",
                formula_plain: "δ_max = P L³ / (3 E I)",
                reference: Reference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("L", "Span", "m"),
                    Variable::new("E", "Young's modulus", "Pa"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: CANTILEVER_ASSUMPTIONS.to_vec(),
                category: EquationCategory::Deflections,
                source_function: "equations::beam::cantilever_tip_deflection",
            },
            Equation::ElasticCurve => EquationMetadata {
                name: "Cantilever Elastic Curve",
                description: "Deflection at distance x from the fixed end for a tip load",
                formula_plain: "δ(x) = P x² (3L − x) / (6 E I)",
                reference: Reference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("x", "Distance from fixed end", "m"),
                    Variable::new("L", "Span", "m"),
                    Variable::new("E", "Young's modulus", "Pa"),
                    Variable::new("I", "Second moment of area", "m⁴"),
                ],
                assumptions: CANTILEVER_ASSUMPTIONS.to_vec(),
                category: EquationCategory::Deflections,
                source_function: "equations::beam::cantilever_point_deflection",
            },
            Equation::TubeMass => EquationMetadata {
                name: "Tube Mass",
                description: "Mass of a straight cylindrical shell",
                formula_plain: "m = π (D² − d²) / 4 · L · ρ",
                reference: Reference::Mechanics,
                variables: vec![
                    Variable::new("L", "Tube length", "m"),
                    Variable::new("ρ", "Density", "kg/m³"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignChecks,
                source_function: "equations::beam::tube_mass",
            },
            Equation::SafetyFactor => EquationMetadata {
                name: "Factor of Safety",
                description: "Yield strength over applied bending stress",
                formula_plain: "n = σ_y / σ  (∞ when σ ≤ 0)",
                reference: Reference::Mechanics,
                variables: vec![
                    Variable::new("σ_y", "Yield strength", "Pa"),
                    Variable::new("σ", "Maximum bending stress", "Pa"),
                ],
                assumptions: vec!["Infinity is a sentinel for a stress-free or compressive state"],
                category: EquationCategory::DesignChecks,
                source_function: "equations::beam::safety_factor",
            },
        }
    }

    /// Equations belonging to a category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// Render the full registry as a Markdown reference.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Spar Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

All formulas treat the spar as a prismatic cantilever fixed at the root (x = 0)
and loaded by a single transverse force at the tip (x = L). Inputs are SI.

---

"#,
    );

    for category in EquationCategory::all() {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();
            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!("**Source:** `{}`\n\n", meta.source_function));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!("**Total Equations:** {}\n", ALL_EQUATIONS.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_has_a_category() {
        let total: usize = EquationCategory::all()
            .iter()
            .map(|c| Equation::in_category(*c).len())
            .sum();
        assert_eq!(total, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_markdown_lists_all_equations() {
        let md = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name), "missing {:?}", eq);
        }
        assert!(md.contains("Roark's 8ed, Table 8.1, Case 1a"));
    }

    #[test]
    fn test_source_functions_are_qualified() {
        for eq in ALL_EQUATIONS {
            assert!(eq.metadata().source_function.starts_with("equations::"));
        }
    }
}
