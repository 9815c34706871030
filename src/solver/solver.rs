use super::cuts::{add_cut, find_cut_row_with, generate_cut};
use super::dual_simplex::dual_simplex;
use super::simplex::{initial_tableau, phase_one, primal_simplex};
use super::*;
use crate::algebra::Rational;
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use std::collections::BTreeSet;
use std::io::Write;

/// Gomory cutting-plane solver for a single [`Problem`].
///
/// ```
/// use gomory::algebra::Rational;
/// use gomory::solver::*;
///
/// let problem = Problem::new([1, 1], Sense::Maximize)
///     .add_constraint([1, 0], ConstraintType::LessEqual, 2)
///     .add_constraint([0, 1], ConstraintType::LessEqual, 3)
///     .with_integer_vars([0, 1]);
///
/// let mut solver = GomorySolver::new(problem, GomorySettings::default()).unwrap();
/// let result = solver.solve().unwrap();
///
/// assert_eq!(result.status(), SolverStatus::OptimalInteger);
/// assert_eq!(result.optimal_value(), Some(&Rational::from(5)));
/// ```
pub struct GomorySolver {
    problem: Problem,
    settings: GomorySettings,
    pub info: SolverInfo,
    callbacks: SolverCallbacks<Iteration>,
    // held as an option so it can be swapped out during solve
    // and avoid borrow conflicts with the other fields
    timers: Option<Timers>,
}

impl GomorySolver {
    /// Create a solver, checking problem dimensions and settings
    pub fn new(problem: Problem, settings: GomorySettings) -> Result<Self, SolverError> {
        problem.validate()?;
        settings.validate()?;

        Ok(Self {
            problem,
            settings,
            info: SolverInfo::new(),
            callbacks: SolverCallbacks::default(),
            timers: Some(Timers::default()),
        })
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn settings(&self) -> &GomorySettings {
        &self.settings
    }

    /// Timers from the most recent solve
    pub fn timers(&self) -> Option<&Timers> {
        self.timers.as_ref()
    }

    /// Called synchronously with every history record, in order.
    pub fn set_iteration_callback(&mut self, f: impl FnMut(&Iteration) + 'static) {
        self.callbacks.iteration_callback = Callback::Rust(Box::new(f));
    }

    pub fn unset_iteration_callback(&mut self) {
        self.callbacks.iteration_callback = Callback::None;
    }

    /// Run the cutting-plane loop
    pub fn solve(&mut self) -> Result<SolverResult, SolverError> {
        let mut timers = self.timers.take().unwrap_or_default();
        timers.reset();
        self.info.reset();

        notimeit! {timers; {
            let _ = self.info.print_banner(&self.settings);
            let _ = self.info.print_configuration(&self.settings, &self.problem);
            let _ = self.info.print_status_header(&self.settings);
        }}

        let mut history = Vec::new();
        let outcome;

        timeit! {timers => "solve"; {
            outcome = self.run(&mut history, &mut timers);
        }}

        self.info.solve_time = timers.total_time().as_secs_f64();
        self.timers = Some(timers);

        let (termination, final_tableau) = outcome?;
        self.info.status = termination.status();

        let _ = self.info.print_footer(&self.settings);

        Ok(SolverResult {
            termination,
            cuts_added: self.info.cuts_added,
            total_iterations: history.len() as u32,
            history,
            final_tableau,
            solve_time: self.info.solve_time,
        })
    }

    fn run(
        &mut self,
        history: &mut Vec<Iteration>,
        timers: &mut Timers,
    ) -> Result<(Termination, Tableau), SolverError> {
        let tableau;
        timeit! {timers => "solve/setup"; {
            tableau = initial_tableau(&self.problem);
        }}
        let tableau = tableau?;

        let description = format!(
            "initial tableau, {} rows and {} columns",
            tableau.num_rows(),
            tableau.num_cols()
        );
        self.record(history, timers, Phase::Init, &tableau, None, description);

        let relaxation;
        timeit! {timers => "solve/relaxation"; {
            relaxation = self.solve_relaxation(tableau, history, timers);
        }}
        let relaxation = relaxation?;

        let tableau = relaxation.tableau;
        match relaxation.status {
            SimplexStatus::Optimal => {}
            SimplexStatus::Unbounded => return Ok((Termination::Unbounded, tableau)),
            SimplexStatus::Infeasible => return Ok((Termination::Infeasible, tableau)),
            SimplexStatus::MaxIterations => {
                let solution = tableau.structural_solution();
                return Ok((Termination::MaxIterations { solution }, tableau));
            }
        }

        if self.problem.integer_vars.is_empty() {
            let termination = Termination::OptimalContinuous {
                value: self.signed(tableau.objective_value()),
                solution: tableau.structural_solution(),
            };
            return Ok((termination, tableau));
        }

        let integer_vars = self.problem.integer_vars.clone();
        let outcome;
        timeit! {timers => "solve/cuts"; {
            outcome = self.cutting_planes(tableau, &integer_vars, history, timers);
        }}
        outcome
    }

    // Primal simplex on the LP relaxation, preceded by a feasibility
    // restoring phase when some >= row starts with a negative rhs
    fn solve_relaxation(
        &mut self,
        tableau: Tableau,
        history: &mut Vec<Iteration>,
        timers: &mut Timers,
    ) -> Result<SimplexResult, SolverError> {
        let max_iter = self.settings.max_iter;
        let phase = Phase::PrimalRelaxation;
        let mut tableau = tableau;

        if !tableau.is_primal_feasible() {
            let start = if tableau.is_dual_feasible() {
                dual_simplex(tableau, max_iter, |t| {
                    self.record(history, timers, phase, t, None, "dual pivot to a feasible start".into())
                })?
            } else {
                phase_one(tableau, max_iter, |t| {
                    self.record(history, timers, phase, t, None, "phase one pivot".into())
                })?
            };
            if start.status != SimplexStatus::Optimal {
                return Ok(start);
            }
            tableau = start.tableau;
        }

        primal_simplex(tableau, max_iter, |t| {
            self.record(history, timers, phase, t, None, "primal pivot".into())
        })
    }

    fn cutting_planes(
        &mut self,
        tableau: Tableau,
        integer_vars: &BTreeSet<usize>,
        history: &mut Vec<Iteration>,
        timers: &mut Timers,
    ) -> Result<(Termination, Tableau), SolverError> {
        let max_iter = self.settings.max_iter;
        let mut tableau = tableau;

        while self.info.cuts_added < self.settings.max_cuts {
            if tableau.has_integer_solution(integer_vars) {
                return Ok((self.optimal_integer(&tableau), tableau));
            }

            let selection = self.settings.cut_selection;
            let Some(row) = find_cut_row_with(&tableau, integer_vars, selection) else {
                return Ok((self.optimal_integer(&tableau), tableau));
            };

            let cut = generate_cut(&tableau, row)?;
            let augmented = add_cut(&tableau, &cut)?;
            self.info.cuts_added += 1;

            let description = format!(
                "cut {} from row {}, {} = {}",
                self.info.cuts_added,
                row,
                cut.source_var,
                tableau.rhs()[row]
            );
            self.record(history, timers, Phase::CutGeneration, &augmented, Some(cut), description);

            let repair = dual_simplex(augmented, max_iter, |t| {
                self.record(history, timers, Phase::DualRepair, t, None, "dual pivot".into())
            })?;

            match repair.status {
                SimplexStatus::Optimal => tableau = repair.tableau,
                SimplexStatus::Infeasible => return Ok((Termination::Infeasible, repair.tableau)),
                SimplexStatus::Unbounded => return Ok((Termination::Unbounded, repair.tableau)),
                SimplexStatus::MaxIterations => {
                    let solution = repair.solution();
                    return Ok((Termination::MaxIterations { solution }, repair.tableau));
                }
            }
        }

        let termination = Termination::MaxCutsReached {
            value: self.signed(tableau.objective_value()),
            solution: tableau.structural_solution(),
        };
        Ok((termination, tableau))
    }

    fn optimal_integer(&self, tableau: &Tableau) -> Termination {
        Termination::OptimalInteger {
            value: self.signed(tableau.objective_value()),
            solution: tableau.structural_solution(),
        }
    }

    // objective values are computed for the maximization form
    fn signed(&self, value: Rational) -> Rational {
        match self.problem.sense {
            Sense::Maximize => value,
            Sense::Minimize => -value,
        }
    }

    fn record(
        &mut self,
        history: &mut Vec<Iteration>,
        timers: &mut Timers,
        phase: Phase,
        tableau: &Tableau,
        cut: Option<GomoryCut>,
        description: String,
    ) {
        let record = Iteration {
            number: history.len() as u32 + 1,
            phase,
            tableau: tableau.clone(),
            cut,
            description,
        };
        self.info.iterations = record.number;

        notimeit! {timers; {
            self.callbacks.notify_iteration(&record);
            let _ = self.info.print_status(&self.settings, self.problem.sense, &record);
        }}

        history.push(record);
    }
}

impl ConfigurablePrintTarget for GomorySolver {
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}
