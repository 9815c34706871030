use super::{GomoryCut, Tableau};
use crate::algebra::Rational;
use crate::io::PrintTarget;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Every required-integer variable is integral at an optimal vertex.
    OptimalInteger,
    /// Optimal solution of a problem without integrality requirements.
    OptimalContinuous,
    /// The relaxation has no finite optimum.
    Unbounded,
    /// No point satisfies the constraints, or a cut excluded every remaining point.
    Infeasible,
    /// A simplex phase reached its pivot cap.
    MaxIterations,
    /// The cut budget ran out before an integral solution was found.
    MaxCutsReached,
}

impl SolverStatus {
    pub fn is_optimal(&self) -> bool {
        matches!(
            *self,
            SolverStatus::OptimalInteger | SolverStatus::OptimalContinuous
        )
    }
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Stage of the cutting-plane loop an [`Iteration`] was recorded in
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum Phase {
    Init,
    PrimalRelaxation,
    CutGeneration,
    DualRepair,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Phase::Init => "init",
            Phase::PrimalRelaxation => "primal",
            Phase::CutGeneration => "cut",
            Phase::DualRepair => "dual",
        };
        write!(f, "{}", s)
    }
}

/// One entry of the solver history.
///
/// The tableau is a snapshot owned by the record and is never shared with
/// the solver's live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iteration {
    /// Position in the history, starting from 1 for the Init record
    pub number: u32,
    pub phase: Phase,
    pub tableau: Tableau,
    /// Set for CutGeneration records
    pub cut: Option<GomoryCut>,
    pub description: String,
}

impl Iteration {
    /// Objective value of the snapshot in maximization form
    pub fn objective_value(&self) -> Rational {
        self.tableau.objective_value()
    }
}

/// Running counters and status of a solve
#[derive(Default, Debug)]
pub struct SolverInfo {
    pub status: SolverStatus,
    /// history records emitted so far
    pub iterations: u32,
    pub cuts_added: u32,
    /// solve time in seconds
    pub solve_time: f64,

    // target for verbose output
    pub(crate) stream: PrintTarget,
}

impl SolverInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.cuts_added = 0;
        self.solve_time = 0f64;
    }

    pub fn solve_duration(&self) -> Duration {
        Duration::from_secs_f64(self.solve_time)
    }
}
