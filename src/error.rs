use crate::core::term::Term;
use thiserror::Error;

/// Term shape violations.
///
/// These signal a caller handing the engine a term of the wrong shape.
/// Failing to unify is not an error; it just produces no solutions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("`{operation}` expects a pair, found {found:?}")]
    NotAPair {
        operation: &'static str,
        found: Term,
    },

    #[error("expected a proper list, found tail {found:?}")]
    ImproperList { found: Term },
}

pub type Result<T> = std::result::Result<T, Error>;
