//! Canonical mapping from capabilities to the effects realising them.
//!
//! A capability is named by a zero-sized marker type and registered by
//! implementing [`Capability`] for it. The registry is the set of those
//! impls, so the compiler enforces its rules:
//!
//! - a capability without an impl cannot be resolved (missing entry);
//! - two impls for the same marker are rejected by coherence (conflict);
//! - new impls for new markers never touch existing ones (open).
//!
//! A registration for a capability of your own:
//!
//! ```
//! use absorb_capability::Capability;
//! use absorb_effects::Effect;
//!
//! /// Effect family issuing fresh identifiers.
//! struct FreshEffect;
//! impl Effect for FreshEffect {}
//!
//! /// Capability to draw fresh identifiers.
//! struct Fresh;
//! impl Capability for Fresh {
//!     type Effect = FreshEffect;
//! }
//! ```
//!
//! Registering the same capability twice fails to build:
//!
//! ```compile_fail,E0119
//! use absorb_capability::Capability;
//! use absorb_effects::Effect;
//!
//! struct TickEffect;
//! impl Effect for TickEffect {}
//!
//! struct TockEffect;
//! impl Effect for TockEffect {}
//!
//! struct Clock;
//! impl Capability for Clock {
//!     type Effect = TickEffect;
//! }
//! impl Capability for Clock {
//!     type Effect = TockEffect;
//! }
//! ```

use std::marker::PhantomData;

use absorb_effects::{Effect, ErrorEffect, Monoid, ReaderEffect, StateEffect, WriterEffect};

use crate::{Computation, MonadError, MonadReader, MonadState, MonadWriter};

/// Registry entry: the effect that realises a capability.
#[diagnostic::on_unimplemented(
    message = "capability `{Self}` has no registered effect",
    label = "unregistered capability",
    note = "register it with `impl Capability for {Self} {{ type Effect = ...; }}`"
)]
pub trait Capability: 'static {
    /// The unique effect implementing this capability.
    type Effect: Effect;
}

/// The effect registered for the capability `C`.
pub type EffectOf<C> = <C as Capability>::Effect;

/// Declares that the computation family implements the capability `C`.
///
/// The standard capabilities get this from their traits through blanket
/// impls. Adapters for user-registered capabilities implement it alongside
/// their capability trait.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement the capability `{C}`",
    note = "absorb through an adapter that implements every required capability"
)]
pub trait Provides<C: Capability>: Computation {}

/// Marker for the ambient-read capability, [`MonadReader<E>`].
pub struct AmbientRead<E>(PhantomData<fn() -> E>);

/// Marker for the output-accumulation capability, [`MonadWriter<W>`].
pub struct OutputAccumulation<W>(PhantomData<fn() -> W>);

/// Marker for the mutable-state capability, [`MonadState<S>`].
pub struct MutableState<S>(PhantomData<fn() -> S>);

/// Marker for the typed-error capability, [`MonadError<Err>`].
pub struct TypedError<Err>(PhantomData<fn() -> Err>);

impl<E: 'static> Capability for AmbientRead<E> {
    type Effect = ReaderEffect<E>;
}

impl<W: Monoid> Capability for OutputAccumulation<W> {
    type Effect = WriterEffect<W>;
}

impl<S: 'static> Capability for MutableState<S> {
    type Effect = StateEffect<S>;
}

impl<Err: 'static> Capability for TypedError<Err> {
    type Effect = ErrorEffect<Err>;
}

impl<M, E> Provides<AmbientRead<E>> for M
where
    M: MonadReader<E>,
    E: 'static,
{
}

impl<M, W> Provides<OutputAccumulation<W>> for M
where
    M: MonadWriter<W>,
    W: Monoid,
{
}

impl<M, S> Provides<MutableState<S>> for M
where
    M: MonadState<S>,
    S: 'static,
{
}

impl<M, Err> Provides<TypedError<Err>> for M
where
    M: MonadError<Err>,
    Err: 'static,
{
}
