//! Reader effect: an ambient value that can be overridden for a scope.

use std::marker::PhantomData;

use crate::{Effect, Handles, Runtime, Sem};

/// Effect family giving read access to an ambient `E`.
pub struct ReaderEffect<E>(PhantomData<fn() -> E>);

impl<E: 'static> Effect for ReaderEffect<E> {}

/// Runtime primitives for [`ReaderEffect<E>`].
pub trait ReaderHandler<E>: Runtime {
    /// Returns the current ambient value.
    fn ask(&mut self) -> E;

    /// Runs `body` with the ambient value replaced by `f(current)`.
    ///
    /// The outer value is back in place once `body` finishes, whether it
    /// returned or aborted.
    fn local<A, F>(&mut self, f: F, body: Sem<Self, A>) -> Result<A, Self::Abort>
    where
        A: 'static,
        F: FnOnce(E) -> E;
}

impl<Rt, E> Handles<ReaderEffect<E>> for Rt
where
    Rt: ReaderHandler<E>,
    E: 'static,
{
}

/// Computation that reads the ambient value.
pub fn ask<E, Rt>() -> Sem<Rt, E>
where
    E: 'static,
    Rt: ReaderHandler<E>,
{
    Sem::from_fn(|runtime: &mut Rt| Ok(runtime.ask()))
}

/// Computation that runs `body` under a locally transformed ambient value.
pub fn local<E, Rt, A, F>(f: F, body: Sem<Rt, A>) -> Sem<Rt, A>
where
    E: 'static,
    Rt: ReaderHandler<E>,
    A: 'static,
    F: FnOnce(E) -> E + 'static,
{
    Sem::from_fn(move |runtime: &mut Rt| runtime.local(f, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Machine;

    type Rt = Machine<i32>;

    #[test]
    fn it_asks_for_the_ambient_value() {
        let mut machine = Rt::new(5, ());
        assert_eq!(ask::<i32, Rt>().run(&mut machine), Ok(5));
    }

    #[test]
    fn it_restores_the_ambient_value_after_local() {
        let mut machine = Rt::new(5, ());
        let program = local(|e: i32| e * 3, ask::<i32, Rt>())
            .and_then(|inner| ask::<i32, Rt>().map(move |outer| (inner, outer)));

        assert_eq!(program.run(&mut machine), Ok((15, 5)));
    }

    #[test]
    fn it_nests_local_scopes() {
        let mut machine = Rt::new(1, ());
        let program = local(
            |e: i32| e + 10,
            local(|e: i32| e * 2, ask::<i32, Rt>()),
        );

        assert_eq!(program.run(&mut machine), Ok(22));
    }
}
