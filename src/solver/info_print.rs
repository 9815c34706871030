use super::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use itertools::Itertools;
use std::io::Write;

impl ConfigurablePrintTarget for SolverInfo {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

const RULE: &str = "---------------------------------------------------------------";

impl SolverInfo {
    pub(crate) fn print_banner(&mut self, settings: &GomorySettings) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "        gomory.rs v{}  -  exact cutting-plane ILP solver",
            crate::VERSION
        )?;
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    pub(crate) fn print_configuration(
        &mut self,
        settings: &GomorySettings,
        problem: &Problem,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        let names = problem.variable_names();
        let integer_names = if problem.integer_vars.is_empty() {
            "none".to_string()
        } else {
            problem.integer_vars.iter().map(|&j| &names[j]).join(", ")
        };
        let count = |t: ConstraintType| {
            problem
                .constraints
                .iter()
                .filter(|c| c.ctype == t)
                .count()
        };

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  sense         = {}", problem.sense)?;
        writeln!(out, "  variables     = {}", problem.num_variables())?;
        writeln!(
            out,
            "  constraints   = {} ({} <=, {} >=)",
            problem.num_constraints(),
            count(ConstraintType::LessEqual),
            count(ConstraintType::GreaterEqual)
        )?;
        writeln!(out, "  integer vars  = {}", integer_names)?;
        writeln!(out)?;

        print_settings(out, settings)?;
        Ok(())
    }

    pub(crate) fn print_status_header(&mut self, settings: &GomorySettings) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(
            out,
            "{:>4}  {:<7} {:>14}  {:>5}  {:>5}  {:>8}",
            "iter", "phase", "objective", "rows", "cols", "feasible"
        )?;
        writeln!(out, "{}", RULE)?;
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_status(
        &mut self,
        settings: &GomorySettings,
        sense: Sense,
        record: &Iteration,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;
        let t = &record.tableau;

        // snapshots hold the maximization form
        let objective = match sense {
            Sense::Maximize => record.objective_value(),
            Sense::Minimize => -record.objective_value(),
        };

        write!(
            out,
            "{:>4}  {:<7} {:>14}  {:>5}  {:>5}  {:>8}",
            record.number,
            record.phase.to_string(),
            objective.to_string(),
            t.num_rows(),
            t.num_cols(),
            _bool_yes_no(t.is_primal_feasible()),
        )?;
        if let Some(cut) = &record.cut {
            write!(out, "  cut from {} (row {})", cut.source_var, cut.source_row)?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub(crate) fn print_footer(&mut self, settings: &GomorySettings) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let solve_time = self.solve_duration();
        let out = &mut self.stream;

        writeln!(out, "{}", RULE)?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(out, "cuts added = {}", self.cuts_added)?;
        writeln!(out, "solve time = {:?}", solve_time)?;
        out.flush()?;
        Ok(())
    }
}

fn print_settings(out: &mut PrintTarget, settings: &GomorySettings) -> std::io::Result<()> {
    writeln!(out, "settings:")?;
    writeln!(
        out,
        "  max iter = {}, max cuts = {}, cut selection = {:?}",
        settings.max_iter, settings.max_cuts, settings.cut_selection
    )?;
    writeln!(out)?;
    Ok(())
}

fn _bool_yes_no(v: bool) -> &'static str {
    match v {
        true => "yes",
        false => "no",
    }
}
