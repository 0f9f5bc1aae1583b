//! Macros for embedding the engine as a DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj($g0, $crate::disj!($($g);*))}
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj($g0, $crate::conj!($($g),*))}
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// The body goals are conjoined.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {{
        $( let $x = $crate::prelude::Var::new(stringify!($x)); )*
        $crate::conj!($($g),*)
    }}
}
