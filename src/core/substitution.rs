//! Substitutions map variables to terms.
//!
//! A substitution is a persistent association list: extending it
//! allocates one cell that points at the old bindings, so the old
//! substitution stays valid and both share their common tail.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use log::trace;
use std::fmt::Formatter;
use std::sync::Arc;

struct Binding {
    var: Var,
    term: Term,
    next: Option<Arc<Binding>>,
}

impl Drop for Binding {
    // unlink iteratively so long chains do not recurse in drop
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Mapping of variables to terms.
#[derive(Clone, Default)]
pub struct Substitution {
    head: Option<Arc<Binding>>,
    len: usize,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution { head: None, len: 0 }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The term `var` is directly bound to, without following chains.
    pub fn get(&self, var: &Var) -> Option<&Term> {
        self.iter().find(|(v, _)| *v == var).map(|(_, t)| t)
    }

    /// Iterate over all bindings, most recent first.
    pub fn iter(&self) -> Bindings<'_> {
        Bindings {
            cursor: self.head.as_deref(),
        }
    }

    /// Return a new substitution that additionally maps `var` to `term`.
    ///
    /// `var` must not be bound in `self` already. This is not checked
    /// here; the unifier only ever extends variables it just walked to
    /// an unbound representative.
    pub fn extend(&self, var: Var, term: impl Into<Term>) -> Self {
        let term = term.into();
        trace!("extend {:?} := {:?}", var, term);
        Substitution {
            head: Some(Arc::new(Binding {
                var,
                term,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Follow variable bindings starting at `t`.
    ///
    /// Returns the first term that is not a bound variable: either an
    /// unbound variable or a non-variable term. There is no occurs
    /// check, so only chains of variables are followed, never the
    /// inside of pairs.
    pub fn walk<'a>(&'a self, t: &'a Term) -> &'a Term {
        let mut current = t;
        while let Term::Var(v) = current {
            match self.get(v) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Resolve `var` to its representative.
    ///
    /// An unbound variable is its own representative.
    pub fn lookup(&self, var: Var) -> Term {
        match self.get(&var) {
            Some(bound) => self.walk(bound).clone(),
            None => Term::Var(var),
        }
    }

    /// Replace every bound variable inside `t`, including inside pairs.
    ///
    /// The cdr spine is followed in a loop, so long lists are fine; only
    /// nesting in car position recurses. Does not terminate if a variable
    /// was unified with a pair that contains that same variable.
    pub fn resolve(&self, t: &Term) -> Term {
        let mut cars = vec![];
        let mut current = self.walk(t);
        while let Term::Pair(p) = current {
            cars.push(self.resolve(&p.car));
            current = self.walk(&p.cdr);
        }
        cars.into_iter()
            .rev()
            .fold(current.clone(), |tail, car| Term::cons(car, tail))
    }
}

impl PartialEq for Substitution {
    /// Two substitutions are equal if they hold the same bindings,
    /// regardless of the order in which they were made.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(var, term)| other.get(var).map_or(false, |t| t == term))
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.reverse();
        write!(f, "{{")?;
        let mut iter = bindings.into_iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the bindings of a [`Substitution`].
pub struct Bindings<'s> {
    cursor: Option<&'s Binding>,
}

impl<'s> Iterator for Bindings<'s> {
    type Item = (&'s Var, &'s Term);

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cursor?;
        self.cursor = cell.next.as_deref();
        Some((&cell.var, &cell.term))
    }
}

/// Construct a substitution
#[macro_export]
macro_rules! substitution {
    () => { $crate::prelude::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {{
        let subs = $crate::prelude::Substitution::empty();
        $(
            let subs = subs.extend($var, $val);
        )*
        subs
    }};
}
