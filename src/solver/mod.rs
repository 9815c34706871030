//! Gomory cutting-plane solver.
//!
//! A [`Problem`] is turned into a simplex [`Tableau`], its LP relaxation is
//! solved with the primal simplex, and fractional cuts are appended and
//! repaired with the dual simplex until every required-integer variable is
//! integral or a budget runs out.  [`GomorySolver`] sequences these steps and
//! records every intermediate tableau in its history.
//!
//! The building blocks are public so that individual steps can be run and
//! inspected on their own:
//!
//! - [`initial_tableau`], [`primal_simplex`], [`phase_one`]
//! - [`dual_simplex`]
//! - [`find_cut_row`], [`generate_cut`], [`add_cut`]

mod callbacks;
pub mod cuts;
pub mod dual_simplex;
mod errors;
mod info;
mod info_print;
mod problem;
mod settings;
pub mod simplex;
mod solution;
#[allow(clippy::module_inception)]
mod solver;
pub mod tableau;

#[cfg(feature = "serde")]
mod json;

pub(crate) use callbacks::*;
pub use cuts::{add_cut, find_cut_row, find_cut_row_with, generate_cut, CutSelection, GomoryCut};
pub use dual_simplex::dual_simplex;
pub use errors::*;
pub use info::*;
pub use problem::*;
pub use settings::*;
pub use simplex::{initial_tableau, phase_one, primal_simplex, SimplexResult, SimplexStatus};
pub use solution::*;
pub use solver::*;
pub use tableau::Tableau;

#[cfg(feature = "serde")]
pub use json::*;
