//! Opaque atomic values.
//!
//! Atoms carry any `Atomic` Rust value. They are compared by value and
//! never look inside each other; values of different Rust types are
//! simply unequal.

use std::any::{Any, TypeId};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Marker for types that may be stored in an [`Atom`].
pub trait Atomic: Debug + Send + Sync + 'static {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for u128 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for i128 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for String {}

trait AtomValue: Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eqv(&self, other: &dyn AtomValue) -> bool;
    fn hash_into(&self, state: &mut dyn Hasher);
}

impl<T: Atomic + PartialEq + Hash> AtomValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eqv(&self, other: &dyn AtomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }

    fn hash_into(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

/// An immutable, shareable atomic value.
#[derive(Clone)]
pub struct Atom(Arc<dyn AtomValue>);

impl Atom {
    pub fn new<T: Atomic + PartialEq + Hash>(value: T) -> Self {
        Atom(Arc::new(value))
    }

    pub fn downcast_ref<T: Atomic>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// `true` if both atoms share the same allocation.
    pub fn same_instance(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.0.eqv(&*other.0)
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_into(state)
    }
}

impl<T: Atomic + PartialEq> PartialEq<T> for Atom {
    fn eq(&self, other: &T) -> bool {
        self.downcast_ref::<T>()
            .map(|x| x == other)
            .unwrap_or(false)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
