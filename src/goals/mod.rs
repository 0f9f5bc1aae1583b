//! Library of goals

pub mod combinators;
pub mod list;
pub mod primitive;
