//! Error effect: raising a typed error and recovering from it.

use std::marker::PhantomData;

use crate::{Effect, Handles, Runtime, Sem};

/// Effect family raising errors of type `Err`.
pub struct ErrorEffect<Err>(PhantomData<fn() -> Err>);

impl<Err: 'static> Effect for ErrorEffect<Err> {}

/// Runtime primitives for [`ErrorEffect<Err>`].
pub trait ErrorHandler<Err>: Runtime {
    /// Turns `error` into the abort that unwinds the current computation.
    fn throw(&mut self, error: Err) -> Self::Abort;

    /// Runs `body`; if it raises an `Err`, runs the computation `handler`
    /// builds from that error instead.
    ///
    /// Aborts that are not an `Err` raised through this effect pass
    /// through untouched.
    fn catch<A, H>(&mut self, body: Sem<Self, A>, handler: H) -> Result<A, Self::Abort>
    where
        A: 'static,
        H: FnOnce(Err) -> Sem<Self, A>;
}

impl<Rt, Err> Handles<ErrorEffect<Err>> for Rt
where
    Rt: ErrorHandler<Err>,
    Err: 'static,
{
}

/// Computation that raises `error`. It never yields an `A`.
pub fn throw<Err, Rt, A>(error: Err) -> Sem<Rt, A>
where
    Err: 'static,
    Rt: ErrorHandler<Err>,
    A: 'static,
{
    Sem::from_fn(move |runtime: &mut Rt| Err(runtime.throw(error)))
}

/// Computation that recovers from errors raised by `body` with `handler`.
pub fn catch<Err, Rt, A, H>(body: Sem<Rt, A>, handler: H) -> Sem<Rt, A>
where
    Err: 'static,
    Rt: ErrorHandler<Err>,
    A: 'static,
    H: FnOnce(Err) -> Sem<Rt, A> + 'static,
{
    Sem::from_fn(move |runtime: &mut Rt| runtime.catch(body, handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{Machine, Raised};

    type Rt = Machine<(), (), (), String>;

    #[test]
    fn it_raises_through_the_runtime() {
        let mut machine = Rt::new((), ());
        let result = throw::<String, Rt, u8>("nope".into()).run(&mut machine);
        assert_eq!(result, Err(Raised("nope".to_string())));
    }

    #[test]
    fn it_recovers_with_the_handler() {
        let mut machine = Rt::new((), ());
        let program = catch(throw::<String, Rt, usize>("four".into()), |e: String| {
            Sem::pure(e.len())
        });

        assert_eq!(program.run(&mut machine), Ok(4));
    }

    #[test]
    fn it_skips_the_handler_on_success() {
        let mut machine = Rt::new((), ());
        let program = catch(Sem::<Rt, _>::pure(1), |_: String| Sem::pure(2));

        assert_eq!(program.run(&mut machine), Ok(1));
    }

    #[test]
    fn it_rethrows_from_the_handler() {
        let mut machine = Rt::new((), ());
        let program = catch(throw::<String, Rt, ()>("first".into()), |e: String| {
            throw(format!("{e} then second"))
        });

        assert_eq!(
            program.run(&mut machine),
            Err(Raised("first then second".to_string()))
        );
    }
}
