use crate::core::goal::Goal;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::run;

/// Assert that a goal fails
pub fn fails(goal: impl Goal<Substitution>) {
    let result = run(goal);
    assert!(result.is_empty(), "expected failure, got {:?}", result);
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: impl Goal<Substitution>) {
    let result = run(goal);
    assert!(!result.is_empty());
}

/// Assert that `solutions` holds exactly one term, equal to `expected`
pub fn has_unique_solution(mut solutions: impl Iterator<Item = Term>, expected: impl Into<Term>) {
    assert_eq!(solutions.next(), Some(expected.into()));
    assert_eq!(solutions.next(), None);
}
