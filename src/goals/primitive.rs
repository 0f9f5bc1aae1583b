use crate::core::goal::Goal;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::core::unify::unify;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<Substitution> {
    let u = u.into();
    let v = v.into();
    move |s: Substitution| match unify(&u, &v, &s) {
        Some(s) => vec![s],
        None => vec![],
    }
}

/// Creates a goal that succeeds exactly once, leaving the state unchanged.
pub fn succeed<T>() -> impl Goal<T> {
    |s: T| vec![s]
}

/// Creates a goal that never succeeds.
pub fn fail<T>() -> impl Goal<T> {
    |_: T| Vec::<T>::new()
}
