//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::{BoxedGoal, Goal};

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both subgoals start from the same state. All results of `g1` come
/// before all results of `g2`.
pub fn disj<T: Clone>(g1: impl Goal<T>, g2: impl Goal<T>) -> impl Goal<T> {
    move |s: T| {
        let mut results = g1.apply(s.clone());
        results.extend(g2.apply(s));
        results
    }
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// `g2` runs on every result of `g1`, in order.
pub fn conj<T>(g1: impl Goal<T>, g2: impl Goal<T>) -> impl Goal<T> {
    move |s: T| {
        g1.apply(s)
            .into_iter()
            .flat_map(|s| g2.apply(s))
            .collect::<Vec<T>>()
    }
}

/// Creates a goal that succeeds once for every success of any of `goals`.
///
/// Equivalent to a right-nested chain of `disj`, ending in `fail`, but
/// evaluated in a loop.
pub fn disj_all<T: Clone>(goals: impl IntoIterator<Item = BoxedGoal<T>>) -> impl Goal<T> {
    let goals: Vec<_> = goals.into_iter().collect();
    move |s: T| {
        let mut results = vec![];
        for g in &goals {
            results.extend(g.apply(s.clone()));
        }
        results
    }
}

/// Creates a goal that succeeds if all of `goals` succeed in sequence.
///
/// Equivalent to a right-nested chain of `conj`, ending in `succeed`,
/// but evaluated in a loop.
pub fn conj_all<T>(goals: impl IntoIterator<Item = BoxedGoal<T>>) -> impl Goal<T> {
    let goals: Vec<_> = goals.into_iter().collect();
    move |s: T| {
        let mut states = vec![s];
        for g in &goals {
            states = states.into_iter().flat_map(|s| g.apply(s)).collect();
            if states.is_empty() {
                break;
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::goal::boxed;
    use crate::core::logic_variable::Var;
    use crate::core::substitution::Substitution;
    use crate::goals::primitive::{eq, fail, succeed};
    use crate::substitution;

    fn add(n: i32) -> impl Goal<i32> {
        move |x: i32| vec![x + n]
    }

    #[test]
    fn disj_keeps_left_results_first() {
        let g = disj(
            disj(fail::<i32>(), succeed()),
            conj(disj(add(1), add(10)), disj(succeed(), succeed())),
        );
        assert_eq!(g.apply(100), vec![100, 101, 101, 110, 110]);
    }

    #[test]
    fn disj_of_fail_and_succeed_returns_input() {
        assert_eq!(disj(fail::<i32>(), succeed()).apply(5), vec![5]);
        let x = Var::new("x");
        let s = substitution! {x: 1};
        assert_eq!(
            disj(fail::<Substitution>(), succeed()).apply(s.clone()),
            vec![s]
        );
    }

    #[test]
    fn conj_of_succeeds_returns_input() {
        assert_eq!(conj(succeed::<i32>(), succeed()).apply(5), vec![5]);
        let x = Var::new("x");
        let s = substitution! {x: 1};
        assert_eq!(
            conj(succeed::<Substitution>(), succeed()).apply(s.clone()),
            vec![s]
        );
    }

    #[test]
    fn disj_branches_do_not_see_each_other() {
        let x = Var::new("x");
        assert_eq!(
            disj(eq("olive", x), eq("oil", x)).run(),
            vec![substitution! {x: "olive"}, substitution! {x: "oil"}]
        );
    }

    #[test]
    fn conj_threads_bindings_into_the_second_goal() {
        let x = Var::new("x");
        let y = Var::new("y");
        assert!(conj(eq("olive", x), eq("oil", x)).run().is_empty());
        assert_eq!(
            conj(eq("olive", x), eq(y, x)).run(),
            vec![substitution! {x: "olive", y: "olive"}]
        );
    }

    #[test]
    fn conj_is_depth_first() {
        let g = conj(disj(add(1), add(2)), disj(add(10), add(20)));
        assert_eq!(g.apply(0), vec![11, 21, 12, 22]);
    }

    #[test]
    fn n_ary_combinators_match_nested_chains() {
        let nested = conj(disj(add(1), add(2)), conj(disj(add(10), add(20)), add(100)));
        let flat = conj_all(vec![
            boxed(disj_all(vec![boxed(add(1)), boxed(add(2))])),
            boxed(disj_all(vec![boxed(add(10)), boxed(add(20))])),
            boxed(add(100)),
        ]);
        assert_eq!(flat.apply(0), nested.apply(0));
    }

    #[test]
    fn empty_n_ary_combinators_are_fail_and_succeed() {
        assert!(disj_all(Vec::<BoxedGoal<i32>>::new()).apply(1).is_empty());
        assert_eq!(conj_all(Vec::<BoxedGoal<i32>>::new()).apply(1), vec![1]);
        assert_eq!(
            conj_all(Vec::<BoxedGoal<Substitution>>::new()).run(),
            vec![Substitution::empty()]
        );
    }
}
