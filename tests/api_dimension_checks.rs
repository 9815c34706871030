use gomory::solver::*;

fn solver_err(problem: Problem) -> SolverError {
    GomorySolver::new(problem, GomorySettings::default())
        .err()
        .unwrap()
}

#[test]
fn test_empty_objective() {
    let problem = Problem::new(Vec::<i64>::new(), Sense::Maximize);
    assert_eq!(
        solver_err(problem),
        SolverError::MalformedProblem(ProblemError::EmptyObjective)
    );
}

#[test]
fn test_bad_constraint_length() {
    let problem = Problem::new([1, 1], Sense::Maximize)
        .add_constraint([1, 1], ConstraintType::LessEqual, 4)
        .add_constraint([1, 1, 1], ConstraintType::LessEqual, 4);
    assert_eq!(
        solver_err(problem),
        SolverError::MalformedProblem(ProblemError::ConstraintLength {
            row: 1,
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_bad_integer_index() {
    let problem = Problem::new([1, 1], Sense::Maximize)
        .add_constraint([1, 1], ConstraintType::LessEqual, 4)
        .with_integer_vars([2]);
    assert_eq!(
        solver_err(problem),
        SolverError::MalformedProblem(ProblemError::IntegerVarOutOfRange {
            index: 2,
            num_vars: 2
        })
    );
}

#[test]
fn test_bad_name_count() {
    let problem = Problem::new([1, 1], Sense::Maximize).with_var_names(["a"]);
    assert_eq!(
        solver_err(problem),
        SolverError::MalformedProblem(ProblemError::NameCount {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_equality_rejected_at_solve() {
    let problem = Problem::new([1, 1], Sense::Maximize)
        .add_constraint([1, 0], ConstraintType::LessEqual, 4)
        .add_constraint([1, 1], ConstraintType::Equal, 2);

    let mut solver = GomorySolver::new(problem, GomorySettings::default()).unwrap();
    assert_eq!(
        solver.solve().unwrap_err(),
        SolverError::InvalidConstraintType { row: 1 }
    );
}

#[test]
fn test_invalid_settings() {
    assert!(GomorySettingsBuilder::default().max_iter(0).build().is_err());

    let settings = GomorySettings {
        max_iter: 0,
        ..GomorySettings::default()
    };
    let problem = Problem::new([1], Sense::Maximize);
    assert_eq!(
        GomorySolver::new(problem, settings).err().unwrap(),
        SolverError::Settings(SettingsError::BadFieldValue("max_iter"))
    );
}

#[test]
fn test_parse_sense_and_type() {
    assert_eq!("max".parse::<Sense>().unwrap(), Sense::Maximize);
    assert_eq!("minimize".parse::<Sense>().unwrap(), Sense::Minimize);
    assert_eq!(
        "sideways".parse::<Sense>().unwrap_err(),
        ProblemError::UnknownSense("sideways".to_string())
    );
    assert_eq!(">=".parse::<ConstraintType>().unwrap(), ConstraintType::GreaterEqual);
    assert!("<>".parse::<ConstraintType>().is_err());
}
