use crate::expression::{normalize, parse};
use crate::solver::ExpressionSolver;
use crate::solver::constants::TARGET;

fn assert_all_reach_target(solutions: &[String]) {
    for solution in solutions {
        let value = parse(solution).and_then(|expr| expr.evaluate());
        assert_eq!(value, Ok(TARGET), "'{}' does not evaluate to 24", solution);
    }
}

#[test]
fn test_solver_creation() {
    let solver = ExpressionSolver::new();
    assert_eq!(solver.target(), 24);
    assert_eq!(ExpressionSolver::default().target(), 24);
}

#[test]
fn test_one_two_three_four() {
    let solver = ExpressionSolver::new();
    let solutions = solver.find_solutions(&[1, 2, 3, 4]);
    assert!(!solutions.is_empty());
    assert!(solutions.iter().any(|s| s == "1 * 2 * 3 * 4"));
    assert_all_reach_target(&solutions);

    let product = normalize("1*2*3*4");
    assert!(product.is_ok());
    assert!(
        solutions
            .iter()
            .any(|s| normalize(s).ok() == product.clone().ok())
    );
}

#[test]
fn test_tens_and_fours() {
    let solver = ExpressionSolver::new();
    let solutions = solver.find_solutions(&[10, 10, 4, 4]);
    assert!(!solutions.is_empty());
    assert!(solutions.iter().any(|s| s == "(10 * 10 - 4) / 4"));
    assert_all_reach_target(&solutions);
}

#[test]
fn test_all_ones_unsolvable() {
    let solver = ExpressionSolver::new();
    assert!(solver.find_solutions(&[1, 1, 1, 1]).is_empty());
    assert!(!solver.is_solvable(&[1, 1, 1, 1]));
}

#[test]
fn test_fractional_solution_excluded() {
    // 8 / (3 - 8 / 3) needs a non-integer intermediate
    let solver = ExpressionSolver::new();
    let solutions = solver.find_solutions(&[3, 3, 8, 8]);
    assert!(solutions.is_empty(), "unexpected solutions: {:?}", solutions);
}

#[test]
fn test_every_number_used_once() {
    let solver = ExpressionSolver::new();
    let solutions = solver.find_solutions(&[2, 3, 4, 13]);
    assert!(!solutions.is_empty());
    for solution in &solutions {
        let leaves = parse(solution).map(|expr| expr.leaf_count());
        assert_eq!(leaves, Ok(4), "'{}' does not use four numbers", solution);
    }
    assert_all_reach_target(&solutions);
}

#[test]
fn test_solutions_are_sorted_and_unique() {
    let solver = ExpressionSolver::new();
    let solutions = solver.find_solutions(&[6, 6, 6, 6]);
    assert!(!solutions.is_empty());
    assert!(solutions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_non_commutative_orders_are_visited() {
    // 13 - 1 only appears when the pair is taken in that order
    let solver = ExpressionSolver::new();
    let solutions = solver.find_solutions(&[13, 1, 2, 1]);
    assert!(solutions.iter().any(|s| s == "(13 - 1) * 2 * 1"));
    assert!(solutions.iter().any(|s| s == "2 * (13 - 1) / 1"));
}

#[test]
fn test_small_inputs() {
    let solver = ExpressionSolver::new();
    assert_eq!(solver.find_solutions(&[24]), vec!["24".to_string()]);
    assert!(solver.find_solutions(&[]).is_empty());
    assert_eq!(
        solver.find_solutions(&[4, 6]),
        vec!["4 * 6".to_string(), "6 * 4".to_string()]
    );
}
