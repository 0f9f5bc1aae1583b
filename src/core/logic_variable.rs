use log::trace;
use std::sync::atomic::{AtomicUsize, Ordering};

static VAR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Named logic variable.
///
/// The name is only a label for display. Identity comes from an id
/// drawn from a global counter when the variable is created, so two
/// variables with the same name are still different variables.
/// Copies of a variable keep its identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    id: usize,
    name: &'static str,
}

impl Var {
    /// Create a new unique logic variable.
    pub fn new(name: &'static str) -> Self {
        // relaxed is enough: we only need every id to be handed out once
        let id = VAR_COUNTER.fetch_add(1, Ordering::Relaxed);
        trace!("new logic variable {}#{}", name, id);
        Var { id, name }
    }

    /// Return the variable's name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Return the identifier that distinguishes this variable from all others.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl From<&'static str> for Var {
    fn from(name: &'static str) -> Self {
        Var::new(name)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
