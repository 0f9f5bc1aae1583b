//! Symbolic terms.
//!
//! A term is an atom, a logic variable, a pair, or the empty list.
//! Terms are immutable; pairs are shared through `Arc` so cloning a
//! term never copies structure.

use crate::core::atom::{Atom, Atomic};
use crate::core::logic_variable::Var;
use crate::core::pair::Pair;
use crate::error::{Error, Result};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::sync::Arc;

#[derive(Clone)]
pub enum Term {
    /// The empty list, terminating proper lists.
    Nil,
    Atom(Atom),
    Var(Var),
    Pair(Arc<Pair>),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn atom<T: Atomic + PartialEq + Hash>(value: T) -> Self {
        Term::Atom(Atom::new(value))
    }

    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(Pair::new(car, cdr)))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Nil)
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Term::Pair(_))
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Term::Pair(p) => Some(p),
            _ => None,
        }
    }

    /// First element of a pair.
    pub fn car(&self) -> Result<&Term> {
        self.expect_pair("car").map(|p| &p.car)
    }

    /// Second element of a pair.
    pub fn cdr(&self) -> Result<&Term> {
        self.expect_pair("cdr").map(|p| &p.cdr)
    }

    fn expect_pair(&self, operation: &'static str) -> Result<&Pair> {
        self.as_pair().ok_or_else(|| Error::NotAPair {
            operation,
            found: self.clone(),
        })
    }

    /// `true` if both terms are the very same instance.
    ///
    /// Variables have no storage of their own, so equal variables are
    /// the same instance. Atoms and pairs must share their allocation.
    pub fn same_instance(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Nil, Term::Nil) => true,
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a.same_instance(b),
            (Term::Pair(a), Term::Pair(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Build a pair from two terms.
pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Term {
    Term::cons(car, cdr)
}

/// First element of a pair; fails on any other term.
pub fn car(pair: &Term) -> Result<Term> {
    pair.car().map(Term::clone)
}

/// Second element of a pair; fails on any other term.
pub fn cdr(pair: &Term) -> Result<Term> {
    pair.cdr().map(Term::clone)
}

/// Build a proper list of `items`, terminated by `Term::Nil`.
pub fn list<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Term {
    let items: Vec<Term> = items.into_iter().map(Into::into).collect();
    items
        .into_iter()
        .rev()
        .fold(Term::Nil, |tail, item| Term::cons(item, tail))
}

/// Collect the elements of a proper list.
pub fn list_items(lst: &Term) -> Result<Vec<Term>> {
    let mut items = vec![];
    let mut cursor = lst;
    loop {
        match cursor {
            Term::Nil => return Ok(items),
            Term::Pair(p) => {
                items.push(p.car.clone());
                cursor = &p.cdr;
            }
            other => {
                return Err(Error::ImproperList {
                    found: other.clone(),
                })
            }
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Term::Nil, Term::Nil) => {}
                (Term::Atom(x), Term::Atom(y)) if x == y => {}
                (Term::Var(x), Term::Var(y)) if x == y => {}
                (Term::Pair(p), Term::Pair(q)) => {
                    if !Arc::ptr_eq(p, q) {
                        pending.push((&p.cdr, &q.cdr));
                        pending.push((&p.car, &q.car));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.as_var().map(|sv| sv == *v).unwrap_or(false)
    }
}

impl<T: Atomic + PartialEq> PartialEq<T> for Term {
    fn eq(&self, other: &T) -> bool {
        match self {
            Term::Atom(a) => a == other,
            _ => false,
        }
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Nil => write!(f, "()"),
            Term::Atom(a) => write!(f, "{:?}", a),
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Pair(p) => write!(f, "{:?}", p),
        }
    }
}

impl<T: Atomic + PartialEq + Hash> From<T> for Term {
    fn from(value: T) -> Self {
        Term::atom(value)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::atom(s.to_string())
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::Nil
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Term::Atom(a)
    }
}

impl From<Pair> for Term {
    fn from(p: Pair) -> Self {
        Term::Pair(Arc::new(p))
    }
}

impl<A: Into<Term>, D: Into<Term>> From<(A, D)> for Term {
    fn from(pair: (A, D)) -> Self {
        Term::cons(pair.0, pair.1)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        list(items)
    }
}
