//! Run capability-polymorphic code inside an effect-handling runtime.
//!
//! Code written against capabilities only names what it needs:
//! `M: MonadReader<Config> + MonadState<Cache>`. An effect runtime (see
//! [`absorb_effects`]) executes computations built from primitive effects.
//! This crate connects the two without touching either side.
//!
//! # Pieces
//!
//! - **Registry** ([`Capability`]): each capability marker names the one
//!   effect realising it, e.g. [`AmbientRead<E>`] → `ReaderEffect<E>`.
//! - **Resolver** ([`CapabilityRow`]): maps a row of capabilities to the
//!   row of effects a runtime must [`Supports`](absorb_effects::Supports).
//! - **Adapters** ([`adapter`]): families whose operations forward, one to
//!   one, to effect primitives.
//! - **Absorber** ([`absorb`] and friends): instantiates a [`Program`] at an
//!   adapter and unwraps it into a runtime computation.
//!
//! # Example
//!
//! ```
//! use absorb_capability::{absorb_combined, MonadReader, MonadState, MonadWriter, Program};
//! use absorb_effects::helpers::Machine;
//!
//! /// Counts visits and greets, without knowing what runs it.
//! struct Visit;
//!
//! impl<M> Program<M> for Visit
//! where
//!     M: MonadReader<String> + MonadWriter<String> + MonadState<u32>,
//! {
//!     type Output = u32;
//!
//!     fn run(self) -> M::Of<u32> {
//!         let greet = M::and_then(M::ask(), |name: String| M::tell(format!("hi {name}")));
//!         let count = M::then(M::modify(|n: u32| n + 1), M::get());
//!         M::then(greet, count)
//!     }
//! }
//!
//! type Rt = Machine<String, String, u32>;
//!
//! let mut machine = Rt::new("ada".into(), 41);
//! let sem = absorb_combined::<String, String, u32, Rt, _>(Visit);
//!
//! assert_eq!(sem.run(&mut machine).unwrap(), 42);
//! assert_eq!(machine.output(), "hi ada");
//! ```
//!
//! # Failure
//!
//! There are no runtime errors. An unregistered capability, a runtime that
//! lacks a required effect, and a duplicate registration are all build
//! errors. Errors raised through [`MonadError`] pass through to the
//! runtime's error effect unchanged.

mod computation;
pub use computation::*;

mod capability;
pub use capability::*;

mod registry;
pub use registry::*;

mod resolver;
pub use resolver::*;

pub mod adapter;
pub use adapter::{
    Adapted, Adapter, CombinedAdapter, ErrorAdapter, ReaderAdapter, StateAdapter, Via,
    WriterAdapter,
};

mod absorb;
pub use absorb::*;
