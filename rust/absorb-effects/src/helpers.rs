//! Reference runtime for tests.
//!
//! [`Machine`] handles all four standard effect families in memory. It is
//! deliberately plain: the ambient value, the output and the state are
//! fields, raised errors unwind as [`Raised`], and every handled primitive
//! bumps an invocation counter so tests can check how many effects a
//! computation performed.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::{
    ErrorHandler, Monoid, ReaderHandler, Runtime, Sem, StateHandler, WriterHandler,
};

/// An error raised through the error effect that nothing caught.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("uncaught error raised through the error effect: {0:?}")]
pub struct Raised<Err>(pub Err);

/// In-memory runtime handling `ReaderEffect<E>`, `WriterEffect<W>`,
/// `StateEffect<S>` and `ErrorEffect<Err>`.
#[derive(Debug, Clone)]
pub struct Machine<E = (), W = (), S = (), Err = Infallible> {
    ambient: E,
    output: W,
    state: S,
    invocations: usize,
    error: PhantomData<fn() -> Err>,
}

impl<E, W: Monoid, S, Err> Machine<E, W, S, Err> {
    /// Creates a machine with the given ambient value and initial state, and
    /// no output yet.
    pub fn new(ambient: E, state: S) -> Self {
        Self {
            ambient,
            output: W::empty(),
            state,
            invocations: 0,
            error: PhantomData,
        }
    }

    /// The output accumulated so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn append(&mut self, output: W) {
        let accumulated = std::mem::replace(&mut self.output, W::empty());
        self.output = accumulated.combine(output);
    }
}

impl<E, W, S, Err> Machine<E, W, S, Err> {
    /// The current ambient value.
    pub fn ambient(&self) -> &E {
        &self.ambient
    }

    /// The current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of primitive operations handled so far.
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    fn count(&mut self, primitive: &'static str) {
        self.invocations += 1;
        tracing::trace!(primitive, invocations = self.invocations, "handled primitive");
    }
}

impl<E, W, S, Err> Machine<E, W, S, Err>
where
    E: 'static,
    W: Monoid,
    S: 'static,
    Err: 'static,
{
    /// Runs `body` against an empty output, then puts the enclosing output
    /// back and returns what `body` accumulated.
    fn isolate<A: 'static>(&mut self, body: Sem<Self, A>) -> (W, Result<A, Raised<Err>>) {
        let outer = std::mem::replace(&mut self.output, W::empty());
        let result = body.run(self);
        let inner = std::mem::replace(&mut self.output, outer);
        (inner, result)
    }
}

impl<E, W, S, Err> Runtime for Machine<E, W, S, Err>
where
    E: 'static,
    W: 'static,
    S: 'static,
    Err: 'static,
{
    type Abort = Raised<Err>;
}

impl<E, W, S, Err> ReaderHandler<E> for Machine<E, W, S, Err>
where
    E: Clone + 'static,
    W: 'static,
    S: 'static,
    Err: 'static,
{
    fn ask(&mut self) -> E {
        self.count("ask");
        self.ambient.clone()
    }

    fn local<A, F>(&mut self, f: F, body: Sem<Self, A>) -> Result<A, Self::Abort>
    where
        A: 'static,
        F: FnOnce(E) -> E,
    {
        self.count("local");
        let scoped = f(self.ambient.clone());
        let outer = std::mem::replace(&mut self.ambient, scoped);
        let result = body.run(self);
        self.ambient = outer;
        result
    }
}

impl<E, W, S, Err> WriterHandler<W> for Machine<E, W, S, Err>
where
    E: 'static,
    W: Monoid + Clone,
    S: 'static,
    Err: 'static,
{
    fn tell(&mut self, output: W) {
        self.count("tell");
        self.append(output);
    }

    fn listen<A: 'static>(&mut self, body: Sem<Self, A>) -> Result<(W, A), Self::Abort> {
        self.count("listen");
        let (heard, result) = self.isolate(body);
        self.append(heard.clone());
        result.map(|value| (heard, value))
    }

    fn pass<A, F>(&mut self, body: Sem<Self, (F, A)>) -> Result<A, Self::Abort>
    where
        A: 'static,
        F: FnOnce(W) -> W + 'static,
    {
        self.count("pass");
        match self.isolate(body) {
            (inner, Ok((transform, value))) => {
                self.append(transform(inner));
                Ok(value)
            }
            (inner, Err(raised)) => {
                self.append(inner);
                Err(raised)
            }
        }
    }
}

impl<E, W, S, Err> StateHandler<S> for Machine<E, W, S, Err>
where
    E: 'static,
    W: 'static,
    S: Clone + 'static,
    Err: 'static,
{
    fn get(&mut self) -> S {
        self.count("get");
        self.state.clone()
    }

    fn put(&mut self, state: S) {
        self.count("put");
        self.state = state;
    }
}

impl<E, W, S, Err> ErrorHandler<Err> for Machine<E, W, S, Err>
where
    E: 'static,
    W: 'static,
    S: 'static,
    Err: 'static,
{
    fn throw(&mut self, error: Err) -> Self::Abort {
        self.count("throw");
        Raised(error)
    }

    fn catch<A, H>(&mut self, body: Sem<Self, A>, handler: H) -> Result<A, Self::Abort>
    where
        A: 'static,
        H: FnOnce(Err) -> Sem<Self, A>,
    {
        self.count("catch");
        match body.run(self) {
            Ok(value) => Ok(value),
            Err(Raised(error)) => handler(error).run(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error, reader, state, writer};
    use anyhow::Result;

    type Rt = Machine<&'static str, Vec<u8>, u8, String>;

    #[test_log::test]
    fn it_restores_the_ambient_value_when_a_scope_aborts() -> Result<()> {
        let mut machine = Rt::new("outer", 0);
        let program = error::catch(
            reader::local(
                |_: &'static str| "inner",
                error::throw::<String, Rt, ()>("stop".into()),
            ),
            |_: String| Sem::pure(()),
        )
        .then(reader::ask::<&'static str, Rt>());

        assert_eq!(program.run(&mut machine)?, "outer");
        assert_eq!(*machine.ambient(), "outer");
        Ok(())
    }

    #[test_log::test]
    fn it_propagates_output_of_an_aborted_pass_untransformed() {
        let mut machine = Rt::new("", 0);
        type Passed = (fn(Vec<u8>) -> Vec<u8>, ());
        let program = writer::pass::<Vec<u8>, Rt, (), fn(Vec<u8>) -> Vec<u8>>(
            writer::tell::<Vec<u8>, Rt>(vec![1])
                .then(error::throw::<String, Rt, Passed>("late".into())),
        );

        assert_eq!(program.run(&mut machine), Err(Raised("late".to_string())));
        assert_eq!(machine.output(), &vec![1]);
    }

    #[test]
    fn it_counts_every_handled_primitive() -> Result<()> {
        let mut machine = Rt::new("", 0);
        state::put::<u8, Rt>(3)
            .then(state::get::<u8, Rt>())
            .then(writer::tell::<Vec<u8>, Rt>(vec![]))
            .run(&mut machine)?;

        assert_eq!(machine.invocations(), 3);
        Ok(())
    }

    #[test]
    fn it_keeps_state_changes_made_before_a_caught_error() {
        let mut machine = Rt::new("", 0);
        let program = error::catch(
            state::put::<u8, Rt>(1).then(error::throw::<String, Rt, ()>("x".into())),
            |_: String| Sem::pure(()),
        );

        assert_eq!(program.run(&mut machine), Ok(()));
        assert_eq!(*machine.state(), 1);
    }
}
