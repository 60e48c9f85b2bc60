//! Absorption: running capability-polymorphic programs in an effect runtime.
//!
//! Absorbing instantiates a [`Program`] at an adapter family and unwraps the
//! result into a runtime computation. The program is generic over every
//! family with its capabilities, so it behaves the same at the adapter as
//! anywhere else, and each operation it performs becomes exactly one effect
//! primitive.
//!
//! Nothing here can fail while running. Every mismatch is rejected at build
//! time. A runtime without a handler for a resolved effect:
//!
//! ```compile_fail
//! use absorb_capability::{absorb_state, Computation, MonadState, Program};
//! use absorb_effects::helpers::Machine;
//!
//! struct Bump;
//! impl<M: MonadState<u8>> Program<M> for Bump {
//!     type Output = ();
//!     fn run(self) -> M::Of<()> {
//!         M::modify(|n| n + 1)
//!     }
//! }
//!
//! // The machine's state is a `String`, not a `u8`.
//! let _ = absorb_state::<u8, Machine<(), (), String>, _>(Bump);
//! ```
//!
//! A capability that was never registered:
//!
//! ```compile_fail
//! use absorb_capability::{absorb, Adapter, ReaderAdapter};
//! use absorb_effects::{helpers::Machine, row};
//!
//! struct Unregistered;
//! struct Nothing;
//! impl<M: absorb_capability::Computation> absorb_capability::Program<M> for Nothing {
//!     type Output = ();
//!     fn run(self) -> M::Of<()> {
//!         M::pure(())
//!     }
//! }
//!
//! type Rt = Machine<i32>;
//! let _ = absorb::<row![Unregistered], ReaderAdapter<Rt>, Rt, _, _>(
//!     Nothing,
//!     <ReaderAdapter<Rt> as Adapter>::unwrap::<()>,
//! );
//! ```

use absorb_effects::{
    ErrorHandler, Monoid, ReaderHandler, Sem, StateHandler, Supports, WriterHandler, row,
};

use crate::{
    Adapter, AmbientRead, CapabilityRow, CombinedAdapter, ErrorAdapter, MutableState,
    OutputAccumulation, Program, ProvidesAll, ReaderAdapter, Resolved, StateAdapter, TypedError,
    WriterAdapter,
};

/// Absorbs `program`, which requires the capabilities `Caps`, through the
/// adapter family `Ad` and its `unwrap`.
///
/// The runtime `Rt` must handle every effect `Caps` resolves to, and `Ad`
/// must implement every capability in `Caps`. This is the entry point for
/// capabilities registered outside this crate.
pub fn absorb<Caps, Ad, Rt, P, U>(program: P, unwrap: U) -> Sem<Rt, P::Output>
where
    Caps: CapabilityRow,
    Rt: Supports<Resolved<Caps>>,
    Ad: ProvidesAll<Caps>,
    P: Program<Ad>,
    U: FnOnce(Ad::Of<P::Output>) -> Sem<Rt, P::Output>,
{
    unwrap(program.run())
}

/// Absorbs a program requiring ambient-read of `E`.
///
/// ```
/// use absorb_capability::{absorb_reader, MonadReader, Program};
/// use absorb_effects::helpers::Machine;
///
/// struct Increment;
///
/// impl<M: MonadReader<i32>> Program<M> for Increment {
///     type Output = i32;
///
///     fn run(self) -> M::Of<i32> {
///         M::asks(|value| value + 1)
///     }
/// }
///
/// let mut machine = Machine::<i32>::new(5, ());
/// let sem = absorb_reader::<i32, Machine<i32>, _>(Increment);
/// assert_eq!(sem.run(&mut machine).unwrap(), 6);
/// ```
pub fn absorb_reader<E, Rt, P>(program: P) -> Sem<Rt, P::Output>
where
    E: 'static,
    Rt: ReaderHandler<E>,
    P: Program<ReaderAdapter<Rt>>,
{
    absorb::<row![AmbientRead<E>], ReaderAdapter<Rt>, Rt, P, _>(
        program,
        <ReaderAdapter<Rt> as Adapter>::unwrap::<P::Output>,
    )
}

/// Absorbs a program requiring output-accumulation over `W`.
pub fn absorb_writer<W, Rt, P>(program: P) -> Sem<Rt, P::Output>
where
    W: Monoid,
    Rt: WriterHandler<W>,
    P: Program<WriterAdapter<Rt>>,
{
    absorb::<row![OutputAccumulation<W>], WriterAdapter<Rt>, Rt, P, _>(
        program,
        <WriterAdapter<Rt> as Adapter>::unwrap::<P::Output>,
    )
}

/// Absorbs a program requiring mutable-state of `S`.
pub fn absorb_state<S, Rt, P>(program: P) -> Sem<Rt, P::Output>
where
    S: 'static,
    Rt: StateHandler<S>,
    P: Program<StateAdapter<Rt>>,
{
    absorb::<row![MutableState<S>], StateAdapter<Rt>, Rt, P, _>(
        program,
        <StateAdapter<Rt> as Adapter>::unwrap::<P::Output>,
    )
}

/// Absorbs a program requiring typed-error over `Err`.
pub fn absorb_error<Err, Rt, P>(program: P) -> Sem<Rt, P::Output>
where
    Err: 'static,
    Rt: ErrorHandler<Err>,
    P: Program<ErrorAdapter<Rt>>,
{
    absorb::<row![TypedError<Err>], ErrorAdapter<Rt>, Rt, P, _>(
        program,
        <ErrorAdapter<Rt> as Adapter>::unwrap::<P::Output>,
    )
}

/// Absorbs a program requiring ambient-read of `E`, output-accumulation
/// over `W` and mutable-state of `S` at once.
pub fn absorb_combined<E, W, S, Rt, P>(program: P) -> Sem<Rt, P::Output>
where
    E: 'static,
    W: Monoid,
    S: 'static,
    Rt: ReaderHandler<E> + WriterHandler<W> + StateHandler<S>,
    P: Program<CombinedAdapter<Rt>>,
{
    absorb::<
        row![AmbientRead<E>, OutputAccumulation<W>, MutableState<S>],
        CombinedAdapter<Rt>,
        Rt,
        P,
        _,
    >(program, <CombinedAdapter<Rt> as Adapter>::unwrap::<P::Output>)
}
