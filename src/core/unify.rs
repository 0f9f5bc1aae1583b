//! First-order unification without occurs check.

use crate::core::substitution::Substitution;
use crate::core::term::Term;
use log::trace;

/// Attempt to unify `u` and `v` under `s`.
///
/// Returns the extended substitution, or `None` if the terms cannot be
/// made equal. Pairs are unified car first, so bindings made in the
/// car are visible when the cdr is unified.
///
/// There is no occurs check: unifying `x` with a pair containing `x`
/// succeeds and leaves a cyclic binding behind.
pub fn unify(u: &Term, v: &Term, s: &Substitution) -> Option<Substitution> {
    let mut s = s.clone();
    let mut pending = vec![(u.clone(), v.clone())];

    while let Some((u, v)) = pending.pop() {
        let u = s.walk(&u).clone();
        let v = s.walk(&v).clone();

        if u.same_instance(&v) {
            continue;
        }

        match (&u, &v) {
            (Term::Var(x), _) => s = s.extend(*x, v.clone()),
            (_, Term::Var(y)) => s = s.extend(*y, u.clone()),
            (Term::Pair(p), Term::Pair(q)) => {
                pending.push((p.cdr.clone(), q.cdr.clone()));
                pending.push((p.car.clone(), q.car.clone()));
            }
            (Term::Atom(a), Term::Atom(b)) if a == b => {}
            _ => {
                trace!("unify clash: {:?} =/= {:?}", u, v);
                return None;
            }
        }
    }

    Some(s)
}

impl Substitution {
    /// Attempt to unify `u` and `v` under this substitution.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        unify(u, v, self)
    }
}
