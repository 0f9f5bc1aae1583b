pub use crate::{
    conj,
    core::{
        atom::{Atom, Atomic},
        goal::{boxed, BoxedGoal, Goal},
        logic_variable::Var,
        pair::Pair,
        substitution::Substitution,
        term::{car, cdr, cons, list, list_items, Term},
        unify::unify,
    },
    disj,
    error::Error,
    fresh,
    goals::{combinators::*, list::*, primitive::*},
    list, run,
};
