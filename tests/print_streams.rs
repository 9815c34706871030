use gomory::{io::ConfigurablePrintTarget, solver::*};
use std::io::{Read, Seek, SeekFrom};

fn problem() -> Problem {
    Problem::new([1, 1], Sense::Maximize)
        .add_constraint([1, 0], ConstraintType::LessEqual, 2)
        .add_constraint([0, 1], ConstraintType::LessEqual, 3)
        .with_integer_vars([0, 1])
}

fn verbose_solver() -> GomorySolver {
    let settings = GomorySettingsBuilder::default().verbose(true).build().unwrap();
    GomorySolver::new(problem(), settings).unwrap()
}

#[test]
fn test_print_to_buffer() {
    let mut solver = verbose_solver();
    solver.print_to_buffer();
    solver.solve().unwrap();

    let out = solver.get_print_buffer().unwrap();
    assert!(out.contains("gomory.rs"));
    assert!(out.contains("integer vars  = x1, x2"));
    assert!(out.contains("Terminated with status = OptimalInteger"));
    assert!(out.contains("cuts added = 0"));
    assert!(out.contains("solve time = "));
}

#[test]
fn test_status_lines_use_problem_sense() {
    // min x + 2y  s.t.  x + y >= 3,  x + 3y >= 5
    let problem = Problem::new([1, 2], Sense::Minimize)
        .add_constraint([1, 1], ConstraintType::GreaterEqual, 3)
        .add_constraint([1, 3], ConstraintType::GreaterEqual, 5);
    let settings = GomorySettingsBuilder::default().verbose(true).build().unwrap();
    let mut solver = GomorySolver::new(problem, settings).unwrap();
    solver.print_to_buffer();
    let result = solver.solve().unwrap();

    let out = solver.get_print_buffer().unwrap();
    let objectives: Vec<String> = out
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| tokens.len() >= 6 && tokens[0].parse::<u32>().is_ok())
        .map(|tokens| tokens[2].to_string())
        .collect();

    assert_eq!(objectives.len(), result.history.len());
    assert_eq!(objectives.first().map(String::as_str), Some("0"));
    assert_eq!(objectives.last().map(String::as_str), Some("4"));
    assert!(objectives.iter().all(|v| !v.starts_with('-')));
}

#[test]
fn test_quiet_solve_prints_nothing() {
    let mut solver = GomorySolver::new(problem(), GomorySettings::default()).unwrap();
    solver.print_to_buffer();
    solver.solve().unwrap();

    assert_eq!(solver.get_print_buffer().unwrap(), "");
}

#[test]
fn test_print_to_file() {
    let mut file = tempfile::tempfile().unwrap();

    let mut solver = verbose_solver();
    solver.print_to_file(file.try_clone().unwrap());
    solver.solve().unwrap();

    let mut out = String::new();
    file.seek(SeekFrom::Start(0)).unwrap();
    file.read_to_string(&mut out).unwrap();
    assert!(out.contains("Terminated with status = OptimalInteger"));
}

#[test]
fn test_print_to_stream() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let stream = file.reopen().unwrap();

    let mut solver = verbose_solver();
    solver.print_to_stream(Box::new(stream));
    solver.solve().unwrap();

    let mut out = String::new();
    file.into_file().read_to_string(&mut out).unwrap();
    assert!(out.contains("gomory.rs"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = verbose_solver();
    solver.print_to_sink();
    let result = solver.solve().unwrap();

    assert_eq!(result.status(), SolverStatus::OptimalInteger);
    assert!(solver.get_print_buffer().is_err());
}
