use gomory::solver::*;
use std::cell::RefCell;
use std::rc::Rc;

fn knapsack() -> Problem {
    Problem::new([6, 8, 7], Sense::Maximize)
        .add_constraint([4, 6, 8], ConstraintType::LessEqual, 14)
        .add_constraint([1, 0, 0], ConstraintType::LessEqual, 1)
        .add_constraint([0, 1, 0], ConstraintType::LessEqual, 1)
        .add_constraint([0, 0, 1], ConstraintType::LessEqual, 1)
        .with_integer_vars([0, 1, 2])
}

#[test]
fn test_iteration_callback() {
    let mut solver = GomorySolver::new(knapsack(), GomorySettings::default()).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    solver.set_iteration_callback(move |it: &Iteration| {
        sink.borrow_mut().push((it.number, it.phase));
    });

    let result = solver.solve().unwrap();
    assert_eq!(result.status(), SolverStatus::OptimalInteger);

    let expected: Vec<_> = result.history.iter().map(|it| (it.number, it.phase)).collect();
    assert_eq!(*seen.borrow(), expected);
    assert_eq!(
        expected.iter().map(|&(_, p)| p).collect::<Vec<_>>(),
        vec![
            Phase::Init,
            Phase::PrimalRelaxation,
            Phase::PrimalRelaxation,
            Phase::PrimalRelaxation,
            Phase::CutGeneration,
            Phase::DualRepair,
        ]
    );
}

#[test]
fn test_unset_iteration_callback() {
    let mut solver = GomorySolver::new(knapsack(), GomorySettings::default()).unwrap();

    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    solver.set_iteration_callback(move |_| *counter.borrow_mut() += 1);
    solver.solve().unwrap();
    assert_eq!(*count.borrow(), 6);

    solver.unset_iteration_callback();
    let result = solver.solve().unwrap();
    assert_eq!(*count.borrow(), 6);
    assert_eq!(result.history.len(), 6);
}

#[test]
fn test_callback_sees_cut_records() {
    let mut solver = GomorySolver::new(knapsack(), GomorySettings::default()).unwrap();

    let cuts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&cuts);
    solver.set_iteration_callback(move |it| {
        if let Some(cut) = &it.cut {
            sink.borrow_mut().push(cut.clone());
        }
    });
    let result = solver.solve().unwrap();

    let cuts = cuts.borrow();
    assert_eq!(cuts.len() as u32, result.cuts_added);
    assert!(cuts.iter().all(|c| c.rhs.is_negative()));
}
