use gomory::{algebra::*, solver::*};
use num_traits::Zero;

fn problems() -> Vec<Problem> {
    vec![
        Problem::new([6, 8, 7], Sense::Maximize)
            .add_constraint([4, 6, 8], ConstraintType::LessEqual, 14)
            .add_constraint([1, 0, 0], ConstraintType::LessEqual, 1)
            .add_constraint([0, 1, 0], ConstraintType::LessEqual, 1)
            .add_constraint([0, 0, 1], ConstraintType::LessEqual, 1)
            .with_integer_vars([0, 1, 2]),
        Problem::new([2, 3], Sense::Minimize)
            .add_constraint([3, 2], ConstraintType::GreaterEqual, 7)
            .add_constraint([1, 4], ConstraintType::GreaterEqual, 5)
            .with_integer_vars([0, 1]),
        Problem::new([1, 1], Sense::Maximize)
            .add_constraint([1, 1], ConstraintType::GreaterEqual, 2)
            .add_constraint([2, 1], ConstraintType::LessEqual, 6)
            .add_constraint([1, 2], ConstraintType::LessEqual, 7)
            .with_integer_vars([0, 1]),
    ]
}

fn solve(problem: &Problem) -> SolverResult {
    let mut solver = GomorySolver::new(problem.clone(), GomorySettings::default()).unwrap();
    solver.solve().unwrap()
}

#[test]
fn test_history_starts_with_initial_tableau() {
    for problem in problems() {
        let result = solve(&problem);
        let first = &result.history[0];

        assert_eq!(first.phase, Phase::Init);
        assert_eq!(first.number, 1);
        assert_eq!(first.tableau, initial_tableau(&problem).unwrap());
        assert_eq!(result.final_tableau, result.history.last().unwrap().tableau);
    }
}

#[test]
fn test_history_numbering() {
    for problem in problems() {
        let result = solve(&problem);
        assert_eq!(result.total_iterations as usize, result.history.len());
        for (k, it) in result.history.iter().enumerate() {
            assert_eq!(it.number as usize, k + 1);
            assert!(!it.description.is_empty());
        }
    }
}

#[test]
fn test_reduced_cost_identity() {
    for problem in problems() {
        for it in solve(&problem).history {
            let t = &it.tableau;
            let reduced = t.reduced_costs();
            for j in 0..t.num_cols() {
                let priced: Rational = t
                    .basic_costs()
                    .iter()
                    .zip(t.matrix())
                    .map(|(c, row)| c * &row[j])
                    .sum();
                assert_eq!(reduced[j], &t.objective()[j] - &priced);
            }
            // basic columns price out to zero
            for &j in t.basis() {
                assert!(reduced[j].is_zero());
            }
        }
    }
}

#[test]
fn test_cut_records() {
    for problem in problems() {
        let result = solve(&problem);
        let cuts: Vec<_> = result
            .history
            .iter()
            .filter(|it| it.phase == Phase::CutGeneration)
            .collect();

        assert_eq!(cuts.len() as u32, result.cuts_added);
        for it in cuts {
            let cut = it.cut.as_ref().unwrap();
            assert!(cut.rhs.is_negative());
            assert_eq!(it.tableau.rhs().last(), Some(&cut.rhs));
            assert!(it.tableau.is_dual_feasible());
        }
        assert!(result
            .history
            .iter()
            .filter(|it| it.phase != Phase::CutGeneration)
            .all(|it| it.cut.is_none()));
    }
}

#[test]
fn test_objective_never_increases_after_cuts() {
    for problem in problems() {
        let result = solve(&problem);
        let after: Vec<_> = result
            .history
            .iter()
            .skip_while(|it| it.phase != Phase::CutGeneration)
            .map(Iteration::objective_value)
            .collect();
        assert!(after.windows(2).all(|w| w[1] <= w[0]));
    }
}
