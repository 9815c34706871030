//! __gomory.rs__ solves small integer linear programs exactly with Gomory's
//! fractional cutting-plane method:
//!
//! $$
//! \begin{array}{rl}
//! \text{maximize or minimize} & c^T x\\\\\[2ex\]
//!  \text{subject to} & a_i^T x \le b_i \text{ or } a_i^T x \ge b_i \\\\\[1ex\]
//!         & x \ge 0, \quad x_j \in \mathbb{Z} \text{ for } j \in I
//!  \end{array}
//! $$
//!
//! All arithmetic is carried out on arbitrary precision rationals, so every
//! pivot, reduced cost and cut coefficient is exact and the reported optimum
//! carries no rounding error.
//!
//! The LP relaxation is solved with the primal simplex method, using a
//! phase one or the dual simplex first when `>=` rows make the slack basis
//! infeasible.  While some required-integer variable is fractional a
//! Gomory cut is appended and primal feasibility restored with the dual
//! simplex method.  Every tableau along the way is kept in the solver
//! history and can also be streamed to a callback.
//!
//! ```
//! use gomory::algebra::Rational;
//! use gomory::solver::*;
//!
//! let problem = Problem::new([6, 8, 7], Sense::Maximize)
//!     .add_constraint([4, 6, 8], ConstraintType::LessEqual, 14)
//!     .add_constraint([1, 0, 0], ConstraintType::LessEqual, 1)
//!     .add_constraint([0, 1, 0], ConstraintType::LessEqual, 1)
//!     .add_constraint([0, 0, 1], ConstraintType::LessEqual, 1)
//!     .with_integer_vars([0, 1, 2]);
//!
//! let mut solver = GomorySolver::new(problem, GomorySettings::default()).unwrap();
//! let result = solver.solve().unwrap();
//!
//! assert_eq!(result.status(), SolverStatus::OptimalInteger);
//! assert_eq!(result.optimal_value(), Some(&Rational::from(15)));
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod timers;
