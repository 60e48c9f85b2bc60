use std::fmt::{Debug, Formatter};

/// An effect-handling runtime.
///
/// A runtime owns whatever the primitive effects need (an ambient value, an
/// output buffer, a state cell, ...) and decides how they behave. What it
/// handles is declared by the handler traits it implements.
pub trait Runtime: Sized + 'static {
    /// Non-local exit that unwinds a computation until something catches it.
    ///
    /// Runtimes without an error effect use [`std::convert::Infallible`].
    type Abort: 'static;
}

type Step<Rt, A> = Box<dyn FnOnce(&mut Rt) -> Result<A, <Rt as Runtime>::Abort>>;

/// A computation executed by the runtime `Rt`, yielding `A`.
///
/// Nothing happens until [`Sem::run`] hands the computation a runtime.
/// Sequencing with [`Sem::and_then`] threads the same runtime through both
/// steps and stops at the first abort.
///
/// Each [`Sem::and_then`] nests one boxed step inside the next, so running a
/// chain recurses once per step and its stack depth grows with its length.
#[must_use = "computations do nothing until run"]
pub struct Sem<Rt: Runtime, A> {
    step: Step<Rt, A>,
}

impl<Rt: Runtime, A: 'static> Sem<Rt, A> {
    /// Computation that performs no effect and yields `value`.
    pub fn pure(value: A) -> Self {
        Self::from_fn(move |_| Ok(value))
    }

    /// Computation defined directly against the runtime.
    ///
    /// This is how handler primitives are lifted into computations.
    pub fn from_fn<F>(step: F) -> Self
    where
        F: FnOnce(&mut Rt) -> Result<A, Rt::Abort> + 'static,
    {
        Self {
            step: Box::new(step),
        }
    }

    /// Computation that immediately aborts.
    pub fn abort(abort: Rt::Abort) -> Self {
        Self::from_fn(move |_| Err(abort))
    }

    /// Runs `self`, then the computation `next` builds from its result.
    pub fn and_then<B, F>(self, next: F) -> Sem<Rt, B>
    where
        B: 'static,
        F: FnOnce(A) -> Sem<Rt, B> + 'static,
    {
        Sem::from_fn(move |runtime| {
            let value = (self.step)(runtime)?;
            next(value).run(runtime)
        })
    }

    /// Transforms the result.
    pub fn map<B, F>(self, f: F) -> Sem<Rt, B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Sem::from_fn(move |runtime| (self.step)(runtime).map(f))
    }

    /// Runs `self`, discards its result, then runs `next`.
    pub fn then<B: 'static>(self, next: Sem<Rt, B>) -> Sem<Rt, B> {
        self.and_then(move |_| next)
    }

    /// Executes the computation against `runtime`.
    pub fn run(self, runtime: &mut Rt) -> Result<A, Rt::Abort> {
        (self.step)(runtime)
    }
}

impl<Rt: Runtime, A> Debug for Sem<Rt, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sem")
            .field("runtime", &std::any::type_name::<Rt>())
            .field("output", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}
