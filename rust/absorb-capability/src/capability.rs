//! The standard capabilities.
//!
//! Each capability is a trait over a [`Computation`] family. Code that only
//! needs some of them states exactly those as bounds and works with any
//! family implementing them: the adapters in [`adapter`](crate::adapter),
//! or anything else.

use absorb_effects::Monoid;

use crate::Computation;

/// Transform applied to output accumulated by a computation.
pub type Transform<W> = Box<dyn FnOnce(W) -> W>;

/// Ambient-read: access to an environment value of type `E`.
pub trait MonadReader<E: 'static>: Computation {
    /// Yields the ambient value.
    fn ask() -> Self::Of<E>;

    /// Runs `m` with the ambient value replaced by `f(current)`. The
    /// replacement is visible inside `m` only.
    fn local<A, F>(f: F, m: Self::Of<A>) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce(E) -> E + 'static;

    /// Yields a projection of the ambient value.
    fn asks<A, F>(f: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce(E) -> A + 'static,
    {
        Self::map(Self::ask(), f)
    }
}

/// Output-accumulation over the monoid `W`.
pub trait MonadWriter<W: Monoid>: Computation {
    /// Accumulates `output`.
    fn tell(output: W) -> Self::Of<()>;

    /// Runs `m` and yields its value with the output it accumulated, as
    /// `(value, output)`. The output is still accumulated outside.
    fn listen<A: 'static>(m: Self::Of<A>) -> Self::Of<(A, W)>;

    /// Runs `m`, which yields a value and a transform, and applies the
    /// transform to the output `m` accumulated, once, before it is
    /// accumulated outside.
    fn pass<A: 'static>(m: Self::Of<(A, Transform<W>)>) -> Self::Of<A>;

    /// Runs `m` with its accumulated output rewritten by `f`.
    fn censor<A, F>(f: F, m: Self::Of<A>) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce(W) -> W + 'static,
    {
        Self::pass(Self::map(m, move |value| {
            (value, Box::new(f) as Transform<W>)
        }))
    }
}

/// Mutable-state of type `S`.
pub trait MonadState<S: 'static>: Computation {
    /// Yields the current state.
    fn get() -> Self::Of<S>;

    /// Replaces the state.
    fn put(state: S) -> Self::Of<()>;

    /// Updates the state with `f`.
    fn modify<F>(f: F) -> Self::Of<()>
    where
        F: FnOnce(S) -> S + 'static,
    {
        Self::and_then(Self::get(), move |state| Self::put(f(state)))
    }

    /// Yields a projection of the current state.
    fn gets<A, F>(f: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce(S) -> A + 'static,
    {
        Self::map(Self::get(), f)
    }
}

/// Typed-error over errors of type `Err`.
pub trait MonadError<Err: 'static>: Computation {
    /// Raises `error`. The computation never yields an `A`.
    fn throw<A: 'static>(error: Err) -> Self::Of<A>;

    /// Runs `m`; if it raises, runs the computation `handler` builds from the
    /// error instead.
    fn catch<A, H>(m: Self::Of<A>, handler: H) -> Self::Of<A>
    where
        A: 'static,
        H: FnOnce(Err) -> Self::Of<A> + 'static;
}
