use crate::core::term::Term;
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

/// A cons cell.
#[derive(Clone, PartialEq)]
pub struct Pair {
    pub car: Term,
    pub cdr: Term,
}

impl Pair {
    pub fn new(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Pair {
            car: car.into(),
            cdr: cdr.into(),
        }
    }
}

impl Drop for Pair {
    // long lists nest through the cdr; unlink them without recursion
    fn drop(&mut self) {
        let mut tail = std::mem::replace(&mut self.cdr, Term::Nil);
        while let Term::Pair(cell) = tail {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => tail = std::mem::replace(&mut cell.cdr, Term::Nil),
                Err(_) => break,
            }
        }
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if !f.alternate() {
            write!(f, "(")?;
        }

        match &self.cdr {
            Term::Nil => write!(f, "{:?}", self.car)?,
            Term::Pair(next) => write!(f, "{:?} {:#?}", self.car, next)?,
            other => write!(f, "{:?} . {:?}", self.car, other)?,
        }

        if !f.alternate() {
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl<A: Into<Term>, D: Into<Term>> From<(A, D)> for Pair {
    fn from(pair: (A, D)) -> Self {
        Pair::new(pair.0, pair.1)
    }
}
