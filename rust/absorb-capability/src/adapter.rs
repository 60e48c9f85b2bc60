//! Adapters: capability implementations that forward to effect primitives.
//!
//! An adapter value, [`Adapted<Tag, Rt, A>`], holds exactly one runtime
//! computation `Sem<Rt, A>`. Its family, [`Via<Tag, Rt>`], is a
//! [`Computation`] whose sequencing is the runtime's own sequencing, and the
//! `Tag` picks which capabilities the family implements:
//!
//! | Family | Capabilities |
//! |--------|--------------|
//! | [`ReaderAdapter<Rt>`] | [`MonadReader<E>`] |
//! | [`WriterAdapter<Rt>`] | [`MonadWriter<W>`] |
//! | [`StateAdapter<Rt>`] | [`MonadState<S>`] |
//! | [`ErrorAdapter<Rt>`] | [`MonadError<Err>`] |
//! | [`CombinedAdapter<Rt>`] | [`MonadReader<E>`], [`MonadWriter<W>`], [`MonadState<S>`] |
//!
//! A tag opts its family into a standard capability by implementing the
//! matching `Forwards*` marker, so the combined adapter goes through exactly
//! the same impls, and the same [`forward`] routines, as the single ones.
//! A tag defined downstream can opt in too, next to its own capabilities:
//!
//! ```
//! use absorb_capability::adapter::{ForwardsReader, Via};
//! use absorb_capability::MonadReader;
//! use absorb_effects::helpers::Machine;
//!
//! enum Auditing {}
//! impl ForwardsReader for Auditing {}
//!
//! fn reads<M: MonadReader<i32>>() {}
//! reads::<Via<Auditing, Machine<i32>>>();
//! ```

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use absorb_effects::{
    ErrorHandler, Monoid, ReaderHandler, Runtime, Sem, StateHandler, WriterHandler,
};

use crate::{Computation, MonadError, MonadReader, MonadState, MonadWriter, Transform};

pub mod forward;

/// Adapter tags whose family forwards [`MonadReader`] to the reader effect.
pub trait ForwardsReader: 'static {}

/// Adapter tags whose family forwards [`MonadWriter`] to the writer effect.
pub trait ForwardsWriter: 'static {}

/// Adapter tags whose family forwards [`MonadState`] to the state effect.
pub trait ForwardsState: 'static {}

/// Adapter tags whose family forwards [`MonadError`] to the error effect.
pub trait ForwardsError: 'static {}

/// Tag of the ambient-read adapter.
pub enum Reading {}
impl ForwardsReader for Reading {}

/// Tag of the output-accumulation adapter.
pub enum Writing {}
impl ForwardsWriter for Writing {}

/// Tag of the mutable-state adapter.
pub enum Stateful {}
impl ForwardsState for Stateful {}

/// Tag of the typed-error adapter.
pub enum Failing {}
impl ForwardsError for Failing {}

/// Tag of the reader + writer + state adapter.
pub enum Combined {}
impl ForwardsReader for Combined {}
impl ForwardsWriter for Combined {}
impl ForwardsState for Combined {}

/// Family of adapted computations over the runtime `Rt`, implementing the
/// capabilities selected by `Tag`. Never constructed.
pub struct Via<Tag, Rt>(Never, PhantomData<fn() -> (Tag, Rt)>);

enum Never {}

/// Ambient-read adapter family.
pub type ReaderAdapter<Rt> = Via<Reading, Rt>;

/// Output-accumulation adapter family.
pub type WriterAdapter<Rt> = Via<Writing, Rt>;

/// Mutable-state adapter family.
pub type StateAdapter<Rt> = Via<Stateful, Rt>;

/// Typed-error adapter family.
pub type ErrorAdapter<Rt> = Via<Failing, Rt>;

/// Reader + writer + state adapter family.
pub type CombinedAdapter<Rt> = Via<Combined, Rt>;

/// A runtime computation wrapped so that it implements capabilities.
#[must_use = "computations do nothing until unwrapped and run"]
pub struct Adapted<Tag, Rt: Runtime, A> {
    sem: Sem<Rt, A>,
    tag: PhantomData<fn() -> Tag>,
}

impl<Tag, Rt: Runtime, A> Adapted<Tag, Rt, A> {
    /// Wraps a runtime computation.
    pub fn wrap(sem: Sem<Rt, A>) -> Self {
        Self {
            sem,
            tag: PhantomData,
        }
    }

    /// Returns the wrapped runtime computation.
    pub fn unwrap(self) -> Sem<Rt, A> {
        self.sem
    }
}

impl<Tag, Rt: Runtime, A> Debug for Adapted<Tag, Rt, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapted")
            .field("tag", &std::any::type_name::<Tag>())
            .field("sem", &self.sem)
            .finish()
    }
}

/// A computation family backed by a runtime, with a way in and out.
///
/// Wrapping then unwrapping gives back the very same computation.
pub trait Adapter: Computation {
    /// The runtime executing the unwrapped computations.
    type Runtime: Runtime;

    /// Wraps a runtime computation into this family.
    fn wrap<A: 'static>(sem: Sem<Self::Runtime, A>) -> Self::Of<A>;

    /// Unwraps a computation of this family into the runtime computation.
    fn unwrap<A: 'static>(m: Self::Of<A>) -> Sem<Self::Runtime, A>;
}

impl<Tag: 'static, Rt: Runtime> Computation for Via<Tag, Rt> {
    type Of<A: 'static> = Adapted<Tag, Rt, A>;

    fn pure<A: 'static>(value: A) -> Self::Of<A> {
        Adapted::wrap(Sem::pure(value))
    }

    fn and_then<A, B, F>(m: Self::Of<A>, next: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static,
    {
        Adapted::wrap(m.sem.and_then(move |value| next(value).sem))
    }
}

impl<Tag: 'static, Rt: Runtime> Adapter for Via<Tag, Rt> {
    type Runtime = Rt;

    fn wrap<A: 'static>(sem: Sem<Rt, A>) -> Self::Of<A> {
        Adapted::wrap(sem)
    }

    fn unwrap<A: 'static>(m: Self::Of<A>) -> Sem<Rt, A> {
        m.sem
    }
}

impl<Tag, Rt, E> MonadReader<E> for Via<Tag, Rt>
where
    Tag: ForwardsReader,
    Rt: ReaderHandler<E>,
    E: 'static,
{
    fn ask() -> Self::Of<E> {
        forward::ask()
    }

    fn local<A, F>(f: F, m: Self::Of<A>) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce(E) -> E + 'static,
    {
        forward::local(f, m)
    }
}

impl<Tag, Rt, W> MonadWriter<W> for Via<Tag, Rt>
where
    Tag: ForwardsWriter,
    Rt: WriterHandler<W>,
    W: Monoid,
{
    fn tell(output: W) -> Self::Of<()> {
        forward::tell(output)
    }

    fn listen<A: 'static>(m: Self::Of<A>) -> Self::Of<(A, W)> {
        forward::listen(m)
    }

    fn pass<A: 'static>(m: Self::Of<(A, Transform<W>)>) -> Self::Of<A> {
        forward::pass(m)
    }
}

impl<Tag, Rt, S> MonadState<S> for Via<Tag, Rt>
where
    Tag: ForwardsState,
    Rt: StateHandler<S>,
    S: 'static,
{
    fn get() -> Self::Of<S> {
        forward::get()
    }

    fn put(state: S) -> Self::Of<()> {
        forward::put(state)
    }
}

impl<Tag, Rt, Err> MonadError<Err> for Via<Tag, Rt>
where
    Tag: ForwardsError,
    Rt: ErrorHandler<Err>,
    Err: 'static,
{
    fn throw<A: 'static>(error: Err) -> Self::Of<A> {
        forward::throw(error)
    }

    fn catch<A, H>(m: Self::Of<A>, handler: H) -> Self::Of<A>
    where
        A: 'static,
        H: FnOnce(Err) -> Self::Of<A> + 'static,
    {
        forward::catch(m, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use absorb_effects::helpers::Machine;
    use absorb_effects::state;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    type Rt = Machine<i32, String, u8, String>;

    assert_impl_all!(ReaderAdapter<Rt>: MonadReader<i32>);
    assert_not_impl_any!(ReaderAdapter<Rt>: MonadWriter<String>, MonadState<u8>, MonadError<String>);

    assert_impl_all!(WriterAdapter<Rt>: MonadWriter<String>);
    assert_not_impl_any!(WriterAdapter<Rt>: MonadReader<i32>, MonadState<u8>, MonadError<String>);

    assert_impl_all!(StateAdapter<Rt>: MonadState<u8>);
    assert_not_impl_any!(StateAdapter<Rt>: MonadReader<i32>, MonadWriter<String>, MonadError<String>);

    assert_impl_all!(ErrorAdapter<Rt>: MonadError<String>);
    assert_not_impl_any!(ErrorAdapter<Rt>: MonadReader<i32>, MonadWriter<String>, MonadState<u8>);

    assert_impl_all!(CombinedAdapter<Rt>: MonadReader<i32>, MonadWriter<String>, MonadState<u8>);
    assert_not_impl_any!(CombinedAdapter<Rt>: MonadError<String>);

    // The ambient value is an `i32`, so there is no reader of `u8`.
    assert_not_impl_any!(ReaderAdapter<Rt>: MonadReader<u8>);

    #[test]
    fn it_unwraps_the_computation_it_wrapped() {
        let mut machine = Rt::new(0, 7);
        let adapted = <StateAdapter<Rt> as Adapter>::wrap(state::get::<u8, Rt>());
        let sem = <StateAdapter<Rt> as Adapter>::unwrap(adapted);

        assert_eq!(sem.run(&mut machine), Ok(7));
        assert_eq!(machine.invocations(), 1);
    }

    #[test]
    fn it_sequences_like_the_runtime() {
        type M = StateAdapter<Rt>;
        let mut machine = Rt::new(0, 1);

        let program = M::and_then(M::get(), |s: u8| M::put(s + 1));
        let program = M::then(program, M::gets(|s: u8| s * 10));

        assert_eq!(M::unwrap(program).run(&mut machine), Ok(20));
    }

    #[test]
    fn it_describes_itself_without_running() {
        let adapted = Adapted::<Reading, Rt, i32>::wrap(Sem::pure(1));
        assert!(format!("{adapted:?}").contains("Reading"));
    }
}
