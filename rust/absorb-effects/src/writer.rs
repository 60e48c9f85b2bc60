//! Writer effect: output accumulated through a [`Monoid`].

use std::marker::PhantomData;

use crate::{Effect, Handles, Monoid, Runtime, Sem};

/// Effect family accumulating output of type `W`.
pub struct WriterEffect<W>(PhantomData<fn() -> W>);

impl<W: Monoid> Effect for WriterEffect<W> {}

/// Runtime primitives for [`WriterEffect<W>`].
///
/// The pairs handed across this interface put the output first:
/// `listen` yields `(output, value)` and `pass` expects `(transform, value)`.
pub trait WriterHandler<W: Monoid>: Runtime {
    /// Appends `output` to the current accumulation.
    fn tell(&mut self, output: W);

    /// Runs `body` and also yields the output it accumulated.
    ///
    /// The output still reaches the enclosing accumulation.
    fn listen<A: 'static>(&mut self, body: Sem<Self, A>) -> Result<(W, A), Self::Abort>;

    /// Runs `body`, then applies the transform it returned to the output it
    /// accumulated before that output reaches the enclosing accumulation.
    ///
    /// If `body` aborts there is no transform and its output propagates
    /// unchanged.
    fn pass<A, F>(&mut self, body: Sem<Self, (F, A)>) -> Result<A, Self::Abort>
    where
        A: 'static,
        F: FnOnce(W) -> W + 'static;
}

impl<Rt, W> Handles<WriterEffect<W>> for Rt
where
    Rt: WriterHandler<W>,
    W: Monoid,
{
}

/// Computation that accumulates `output`.
pub fn tell<W, Rt>(output: W) -> Sem<Rt, ()>
where
    W: Monoid,
    Rt: WriterHandler<W>,
{
    Sem::from_fn(move |runtime: &mut Rt| {
        runtime.tell(output);
        Ok(())
    })
}

/// Computation yielding `body`'s value together with the output it
/// accumulated, as `(output, value)`.
pub fn listen<W, Rt, A>(body: Sem<Rt, A>) -> Sem<Rt, (W, A)>
where
    W: Monoid,
    Rt: WriterHandler<W>,
    A: 'static,
{
    Sem::from_fn(move |runtime: &mut Rt| runtime.listen(body))
}

/// Computation that runs `body` and rewrites its output with the transform
/// it returns.
pub fn pass<W, Rt, A, F>(body: Sem<Rt, (F, A)>) -> Sem<Rt, A>
where
    W: Monoid,
    Rt: WriterHandler<W>,
    A: 'static,
    F: FnOnce(W) -> W + 'static,
{
    Sem::from_fn(move |runtime: &mut Rt| runtime.pass(body))
}

/// Computation that rewrites the output of `body` with `f`.
pub fn censor<W, Rt, A, F>(f: F, body: Sem<Rt, A>) -> Sem<Rt, A>
where
    W: Monoid,
    Rt: WriterHandler<W>,
    A: 'static,
    F: FnOnce(W) -> W + 'static,
{
    pass(body.map(move |value| (f, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Machine;
    use pretty_assertions::assert_eq;

    type Rt = Machine<(), String>;

    #[test]
    fn it_accumulates_left_to_right() {
        let mut machine = Rt::new((), ());
        tell::<String, Rt>("a".into())
            .then(tell::<String, Rt>("b".into()))
            .run(&mut machine)
            .unwrap();

        assert_eq!(machine.output(), "ab");
    }

    #[test]
    fn it_listens_without_consuming_output() {
        let mut machine = Rt::new((), ());
        let program = tell::<String, Rt>("outer ".into())
            .then(listen::<String, Rt, _>(tell::<String, Rt>("inner".into()).map(|_| 1)));

        assert_eq!(program.run(&mut machine), Ok(("inner".to_string(), 1)));
        assert_eq!(machine.output(), "outer inner");
    }

    #[test]
    fn it_applies_pass_transform_once() {
        let mut machine = Rt::new((), ());
        let program = tell::<String, Rt>("<".into()).then(pass(
            tell::<String, Rt>("x".into()).map(|_| (|w: String| w.repeat(2), 'a')),
        ));

        assert_eq!(program.run(&mut machine), Ok('a'));
        assert_eq!(machine.output(), "<xx");
    }

    #[test]
    fn it_censors_only_the_inner_output() {
        let mut machine = Rt::new((), ());
        let program = tell::<String, Rt>("keep ".into()).then(censor(
            |w: String| w.to_uppercase(),
            tell::<String, Rt>("shout".into()),
        ));

        program.run(&mut machine).unwrap();
        assert_eq!(machine.output(), "keep SHOUT");
    }
}
