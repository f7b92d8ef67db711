//! # Spar Mechanics Equations
//!
//! Every closed-form formula the engine evaluates lives here, as plain `f64`
//! functions over SI inputs. Keeping them in one place lets each formula be
//! checked against its reference independently of input validation.
//!
//! ## Modules
//!
//! - [`section`] - Hollow circular tube properties (A, I, c)
//! - [`beam`] - Cantilever tip-load formulas (moment, stress, deflection, mass)
//! - [`registry`] - Equation metadata for the generated reference and CLI
//!
//! ## Sign Conventions
//!
//! - **Load**: positive in the direction of lift
//! - **Moment / deflection**: carry the sign of the load
//! - **Position**: measured from the fixed root toward the tip

pub mod beam;
pub mod registry;
pub mod section;

pub use beam::{
    average_shear_stress,
    bending_stress,
    cantilever_point_deflection,
    cantilever_point_max_moment,
    cantilever_point_moment,
    cantilever_tip_deflection,
    safety_factor,
    tube_mass,
};

pub use section::{
    combined_moment_of_inertia,
    tube_area,
    tube_extreme_fiber,
    tube_moment_of_inertia,
    tube_section_modulus,
};

pub use registry::{
    generate_equations_markdown,
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
};
