//! A tiny relational logic kernel in the style of miniKANREN.
//!
//! Terms are built from atoms, logic variables and pairs. Goals map a
//! [`Substitution`](crate::prelude::Substitution) to every
//! substitution under which they succeed; they are composed with
//! [`disj`](crate::prelude::disj) and [`conj`](crate::prelude::conj)
//! and executed with [`run`]. Search is eager: `run` returns all
//! solutions at once, so goals with infinitely many solutions never
//! return.

#[macro_use]
pub mod macros;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod testing;

pub use crate::error::{Error, Result};

use crate::core::goal::Goal;
use crate::core::substitution::Substitution;
use log::debug;

/// Apply `goal` to the empty substitution and collect every solution.
pub fn run(goal: impl Goal<Substitution>) -> Vec<Substitution> {
    let solutions = goal.apply(Substitution::empty());
    debug!("run produced {} solution(s)", solutions.len());
    solutions
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::substitution;

    #[test]
    fn it_works() {
        let u = Var::new("u");
        let x = Var::new("x");
        let y = Var::new("y");

        assert_eq!(run(eq(x, u)), vec![substitution!(x: u)]);
        assert_eq!(run(eq(x, 42)), vec![substitution!(x: 42)]);
        assert_eq!(run(eq(42, 42)), vec![substitution!()]);
        assert!(run(eq(42, 123)).is_empty());
        assert!(run(fail::<Substitution>()).is_empty());
        assert_eq!(run(eq(x, y)), vec![substitution! {x: y}]);

        assert_eq!(
            run(disj!(eq("virgin", x); eq("olive", x); eq("oil", x))),
            vec![
                substitution! {x: "virgin"},
                substitution! {x: "olive"},
                substitution! {x: "oil"},
            ]
        );

        assert_eq!(
            run(conj!(eq("olive", x), eq(y, x), eq(u, y)))
                .into_iter()
                .map(|s| s.lookup(u))
                .collect::<Vec<_>>(),
            vec![Term::from("olive")]
        );

        assert_eq!(
            format!("{:?}", run(fresh!((a, b), eq(a, b)))),
            "[{a: b}]"
        );
    }

    #[test]
    fn unification_through_pairs() {
        let x = Var::new("x");
        let y = Var::new("y");

        let s = unify(&x.into(), &y.into(), &Substitution::empty()).unwrap();
        assert_eq!(s, substitution! {x: y});

        let s = unify(&x.into(), &Term::new(1), &s).unwrap();
        assert_eq!(s, substitution! {x: y, y: 1});
        assert_eq!(s.lookup(y), 1);
        assert_eq!(s.lookup(x), 1);

        let s = unify(&cons(x, y), &cons(y, 1), &Substitution::empty()).unwrap();
        assert_eq!(s, substitution! {x: y, y: 1});
    }

    #[test]
    fn relations_can_be_built_from_goal_constructors() {
        fn teacup(t: Var) -> impl Goal<Substitution> {
            disj!(eq("tea", t); eq("cup", t))
        }

        let x = Var::new("x");
        assert_eq!(
            run(teacup(x)),
            vec![substitution!(x: "tea"), substitution!(x: "cup")]
        );

        let y = Var::new("y");
        let both = run(conj!(teacup(x), teacup(y)));
        assert_eq!(both.len(), 4);
        assert_eq!(
            both.iter()
                .map(|s| (s.lookup(x), s.lookup(y)))
                .collect::<Vec<_>>(),
            vec![
                (Term::from("tea"), Term::from("tea")),
                (Term::from("tea"), Term::from("cup")),
                (Term::from("cup"), Term::from("tea")),
                (Term::from("cup"), Term::from("cup")),
            ]
        );
    }

    #[test]
    fn results_resolve_through_nested_structure() {
        let q = Var::new("q");
        let solutions = run(fresh!(
            (a, d),
            eq(q, cons(a, d)),
            eq(a, 1),
            eq(d, list![2, 3])
        ));
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].resolve(&q.into()), list![1, 2, 3]);
    }
}
