use super::{Iteration, SolverStatus, Tableau};
use crate::algebra::Rational;
use std::collections::BTreeMap;

/// Terminal state of a solve together with the data it carries.
///
/// Values are reported in the sense of the original problem, so a
/// minimization returns its minimum rather than the negated maximum used
/// internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    OptimalInteger {
        value: Rational,
        solution: Vec<Rational>,
    },
    OptimalContinuous {
        value: Rational,
        solution: Vec<Rational>,
    },
    Unbounded,
    Infeasible,
    /// Solution of the last tableau reached
    MaxIterations { solution: Vec<Rational> },
    /// Best (possibly fractional) point reached when the cut budget ran out
    MaxCutsReached {
        value: Rational,
        solution: Vec<Rational>,
    },
}

impl Termination {
    pub fn status(&self) -> SolverStatus {
        match self {
            Termination::OptimalInteger { .. } => SolverStatus::OptimalInteger,
            Termination::OptimalContinuous { .. } => SolverStatus::OptimalContinuous,
            Termination::Unbounded => SolverStatus::Unbounded,
            Termination::Infeasible => SolverStatus::Infeasible,
            Termination::MaxIterations { .. } => SolverStatus::MaxIterations,
            Termination::MaxCutsReached { .. } => SolverStatus::MaxCutsReached,
        }
    }

    pub fn optimal_value(&self) -> Option<&Rational> {
        match self {
            Termination::OptimalInteger { value, .. }
            | Termination::OptimalContinuous { value, .. }
            | Termination::MaxCutsReached { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Values of the structural variables
    pub fn solution(&self) -> Option<&[Rational]> {
        match self {
            Termination::OptimalInteger { solution, .. }
            | Termination::OptimalContinuous { solution, .. }
            | Termination::MaxIterations { solution }
            | Termination::MaxCutsReached { solution, .. } => Some(solution),
            Termination::Unbounded | Termination::Infeasible => None,
        }
    }
}

/// Everything produced by [`GomorySolver::solve`](crate::solver::GomorySolver::solve)
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub termination: Termination,
    /// number of cuts appended to the tableau
    pub cuts_added: u32,
    /// number of history records, the Init record included
    pub total_iterations: u32,
    pub history: Vec<Iteration>,
    pub final_tableau: Tableau,
    /// solve time in seconds
    pub solve_time: f64,
}

impl SolverResult {
    pub fn status(&self) -> SolverStatus {
        self.termination.status()
    }

    pub fn optimal_value(&self) -> Option<&Rational> {
        self.termination.optimal_value()
    }

    pub fn solution(&self) -> Option<&[Rational]> {
        self.termination.solution()
    }

    /// Value of every column of the final tableau, slacks and cut slacks
    /// included, keyed by variable name
    pub fn solution_by_name(&self) -> BTreeMap<String, Rational> {
        self.final_tableau.solution_by_variable_name()
    }
}
