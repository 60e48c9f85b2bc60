//! State effect: a single mutable cell.

use std::marker::PhantomData;

use crate::{Effect, Handles, Runtime, Sem};

/// Effect family over a mutable state of type `S`.
pub struct StateEffect<S>(PhantomData<fn() -> S>);

impl<S: 'static> Effect for StateEffect<S> {}

/// Runtime primitives for [`StateEffect<S>`].
pub trait StateHandler<S>: Runtime {
    /// Returns the current state.
    fn get(&mut self) -> S;

    /// Replaces the current state.
    fn put(&mut self, state: S);
}

impl<Rt, S> Handles<StateEffect<S>> for Rt
where
    Rt: StateHandler<S>,
    S: 'static,
{
}

/// Computation that reads the state.
pub fn get<S, Rt>() -> Sem<Rt, S>
where
    S: 'static,
    Rt: StateHandler<S>,
{
    Sem::from_fn(|runtime: &mut Rt| Ok(runtime.get()))
}

/// Computation that replaces the state.
pub fn put<S, Rt>(state: S) -> Sem<Rt, ()>
where
    S: 'static,
    Rt: StateHandler<S>,
{
    Sem::from_fn(move |runtime: &mut Rt| {
        runtime.put(state);
        Ok(())
    })
}

/// Computation that updates the state with `f`.
pub fn modify<S, Rt, F>(f: F) -> Sem<Rt, ()>
where
    S: 'static,
    Rt: StateHandler<S>,
    F: FnOnce(S) -> S + 'static,
{
    get::<S, Rt>().and_then(move |state| put(f(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Machine;

    type Rt = Machine<(), (), Vec<&'static str>>;

    #[test]
    fn it_reads_back_what_was_put() {
        let mut machine = Rt::new((), vec![]);
        let program = put::<_, Rt>(vec!["one"]).then(get::<Vec<&'static str>, Rt>());

        assert_eq!(program.run(&mut machine), Ok(vec!["one"]));
    }

    #[test]
    fn it_modifies_in_place() {
        let mut machine = Rt::new((), vec!["a"]);
        modify::<Vec<&'static str>, Rt, _>(|mut items| {
            items.push("b");
            items
        })
        .run(&mut machine)
        .unwrap();

        assert_eq!(machine.state(), &vec!["a", "b"]);
    }
}
