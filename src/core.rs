//! Core data structures and logic algorithms

pub mod atom;
pub mod goal;
pub mod logic_variable;
pub mod pair;
pub mod substitution;
pub mod term;
pub mod unify;
