use crate::core::goal::{boxed, Goal};
use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::{list_items, Term};
use crate::error::Result;
use crate::goals::combinators::{conj, disj_all};
use crate::goals::primitive::eq;

/// Build a list term.
///
/// `list![a, b, c]` is a proper list, `list![a, b ; tail]` ends in
/// `tail`, and a parenthesized group becomes a nested list in any
/// position. Use `cons` or a tuple term for a single dotted pair.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::Nil };

    (($($first:tt)*)) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], ())
    };

    ($single:expr) => {
        $crate::prelude::Term::cons($single, ())
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Term::cons($car, $cdr)
    };

    (($($first:tt)*), $($rest:tt)*) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], $crate::list![$($rest)*])
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Term::cons($first, $crate::list![$($rest)*])
    };
}

/// Creates a goal that succeeds once for every element of `lst` that
/// unifies with `term`, in list order.
///
/// Fails with [`Error::ImproperList`](crate::Error::ImproperList) if
/// `lst` is not a proper list.
pub fn choice(term: impl Into<Term>, lst: impl Into<Term>) -> Result<impl Goal<Substitution>> {
    let term = term.into();
    let alternatives = list_items(&lst.into())?
        .into_iter()
        .map(|item| boxed(eq(term.clone(), item)))
        .collect::<Vec<_>>();
    Ok(disj_all(alternatives))
}

/// Creates a goal that succeeds once for every pair of equal elements
/// drawn from `l1` and `l2`, ordered by `l1` first.
///
/// The common element is bound to a fresh variable named `v`. Use
/// [`common_el_with`] to pick the variable yourself.
pub fn common_el(l1: impl Into<Term>, l2: impl Into<Term>) -> Result<impl Goal<Substitution>> {
    common_el_with(Var::new("v"), l1, l2)
}

/// Like [`common_el`], but binds the common element to `v`.
pub fn common_el_with(
    v: Var,
    l1: impl Into<Term>,
    l2: impl Into<Term>,
) -> Result<impl Goal<Substitution>> {
    Ok(conj(choice(v, l1)?, choice(v, l2)?))
}
