/// A goal maps a state to every state under which it succeeds.
///
/// Any `Fn(T) -> Vec<T>` is a goal. Results are produced eagerly and in
/// order; an empty vector means the goal failed.
pub trait Goal<T> {
    fn apply(&self, s: T) -> Vec<T>;

    /// Apply the goal to the default (empty) state.
    fn run(&self) -> Vec<T>
    where
        T: Default,
    {
        self.apply(T::default())
    }
}

impl<T, G: Fn(T) -> Vec<T>> Goal<T> for G {
    fn apply(&self, s: T) -> Vec<T> {
        self(s)
    }
}

/// A type-erased goal, for building goals from runtime collections.
pub type BoxedGoal<T> = Box<dyn Fn(T) -> Vec<T>>;

pub fn boxed<T: 'static>(goal: impl 'static + Goal<T>) -> BoxedGoal<T> {
    Box::new(move |s| goal.apply(s))
}
