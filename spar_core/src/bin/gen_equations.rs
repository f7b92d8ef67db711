//! Write the formula reference (EQUATIONS.md) from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations              # writes spar_core/EQUATIONS.md
//! cargo run --bin gen-equations -- out.md    # writes out.md
//! cargo run --bin gen-equations -- -         # prints to stdout
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use spar_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "spar_core/EQUATIONS.md";

fn main() -> ExitCode {
    let target = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let markdown = generate_equations_markdown();

    if target == "-" {
        print!("{}", markdown);
        return ExitCode::SUCCESS;
    }

    let output_path = PathBuf::from(target);
    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} equations ({} bytes) to {}",
                ALL_EQUATIONS.len(),
                markdown.len(),
                output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            ExitCode::FAILURE
        }
    }
}
