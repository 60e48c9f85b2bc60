//! One routine per capability operation, each forwarding to the matching
//! effect primitive exactly once.
//!
//! The routines are generic over the adapter tag, so every adapter family,
//! including ones defined for user-registered capabilities, shares them.

use absorb_effects::{
    ErrorHandler, Monoid, ReaderHandler, StateHandler, WriterHandler, error, reader, state, writer,
};

use super::Adapted;
use crate::Transform;

/// `ask` through the reader effect.
pub fn ask<Tag, Rt, E>() -> Adapted<Tag, Rt, E>
where
    Rt: ReaderHandler<E>,
    E: 'static,
{
    Adapted::wrap(reader::ask())
}

/// `local` through the reader effect's own scoped override.
pub fn local<Tag, Rt, E, A, F>(f: F, m: Adapted<Tag, Rt, A>) -> Adapted<Tag, Rt, A>
where
    Rt: ReaderHandler<E>,
    E: 'static,
    A: 'static,
    F: FnOnce(E) -> E + 'static,
{
    Adapted::wrap(reader::local(f, m.sem))
}

/// `tell` through the writer effect.
pub fn tell<Tag, Rt, W>(output: W) -> Adapted<Tag, Rt, ()>
where
    Rt: WriterHandler<W>,
    W: Monoid,
{
    Adapted::wrap(writer::tell(output))
}

/// `listen` through the writer effect. The effect yields
/// `(output, value)`; the capability yields `(value, output)`.
pub fn listen<Tag, Rt, W, A>(m: Adapted<Tag, Rt, A>) -> Adapted<Tag, Rt, (A, W)>
where
    Rt: WriterHandler<W>,
    W: Monoid,
    A: 'static,
{
    Adapted::wrap(writer::listen::<W, Rt, A>(m.sem).map(|(output, value)| (value, output)))
}

/// `pass` through the writer effect, which expects `(transform, value)`.
pub fn pass<Tag, Rt, W, A>(m: Adapted<Tag, Rt, (A, Transform<W>)>) -> Adapted<Tag, Rt, A>
where
    Rt: WriterHandler<W>,
    W: Monoid,
    A: 'static,
{
    let swapped = m.sem.map(|(value, transform)| (transform, value));
    Adapted::wrap(writer::pass::<W, Rt, A, Transform<W>>(swapped))
}

/// `get` through the state effect.
pub fn get<Tag, Rt, S>() -> Adapted<Tag, Rt, S>
where
    Rt: StateHandler<S>,
    S: 'static,
{
    Adapted::wrap(state::get())
}

/// `put` through the state effect.
pub fn put<Tag, Rt, S>(state: S) -> Adapted<Tag, Rt, ()>
where
    Rt: StateHandler<S>,
    S: 'static,
{
    Adapted::wrap(state::put(state))
}

/// `throw` through the error effect.
pub fn throw<Tag, Rt, Err, A>(error: Err) -> Adapted<Tag, Rt, A>
where
    Rt: ErrorHandler<Err>,
    Err: 'static,
    A: 'static,
{
    Adapted::wrap(error::throw(error))
}

/// `catch` through the error effect. The handler builds adapted
/// computations; its result is unwrapped before the effect runs it.
pub fn catch<Tag, Rt, Err, A, H>(m: Adapted<Tag, Rt, A>, handler: H) -> Adapted<Tag, Rt, A>
where
    Rt: ErrorHandler<Err>,
    Err: 'static,
    A: 'static,
    H: FnOnce(Err) -> Adapted<Tag, Rt, A> + 'static,
{
    Adapted::wrap(error::catch(m.sem, move |error: Err| handler(error).sem))
}
